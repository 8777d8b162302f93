use crate::*;

use card_slider::{Direction, ScrollCommand, SliderOptions, TrackMetrics};

const SECOND: u64 = 1000;

/// Ten 100px cards in a 300px track (max offset 700), with the geometry already reported.
fn controller(options: SliderOptions) -> Controller {
    let mut c = Controller::new(options)
        .with_controller_options(ControllerOptions::default().with_smooth_scroll_ms(200));
    c.on_slot_change(10, Some(100));
    c.on_track_resized(TrackMetrics::new(0, 1000, 300));
    c
}

/// Runs the clock far enough for any animation started at `now_ms` to land.
fn settle(c: &mut Controller, now_ms: u64) -> Tick {
    c.tick(now_ms + 200)
}

#[test]
fn attach_with_auto_scroll_steps_immediately_then_every_interval() {
    let mut c = controller(SliderOptions::new().with_auto_scroll(true));

    let first = c.attach(0);
    assert_eq!(first, Some(ScrollCommand::smooth(100)));
    assert_eq!(c.slider().current_index(), 1);
    assert!(c.is_autoplay_running());

    let tick = settle(&mut c, 0);
    assert_eq!(tick.scroll_left, Some(100));
    assert!(!tick.autoplay_fired);

    assert!(!c.tick(SECOND).autoplay_fired);
    let tick = c.tick(2 * SECOND);
    assert!(tick.autoplay_fired);
    assert_eq!(c.slider().current_index(), 2);
    settle(&mut c, 2 * SECOND);
    assert_eq!(c.slider().scroll_left(), Some(200));

    assert!(c.tick(4 * SECOND).autoplay_fired);
    assert_eq!(c.slider().current_index(), 3);
}

#[test]
fn autoplay_uses_configured_interval() {
    let mut c = controller(
        SliderOptions::new()
            .with_auto_scroll(true)
            .with_auto_scroll_seconds(0.5),
    );
    c.attach(0);
    assert!(!c.tick(499).autoplay_fired);
    assert!(c.tick(500).autoplay_fired);
    assert!(c.tick(1000).autoplay_fired);
}

#[test]
fn autoplay_stops_at_end_without_wrap_and_wraps_with_it() {
    let mut c = controller(
        SliderOptions::new()
            .with_auto_scroll(true)
            .with_auto_scroll_seconds(1.0),
    );
    c.attach(0);
    let mut now = 0;
    for _ in 0..12 {
        now += SECOND;
        c.tick(now);
        settle(&mut c, now);
    }
    assert_eq!(c.slider().scroll_left(), Some(700));
    assert_eq!(c.slider().current_index(), 7);

    c.update_options(|o| o.start_again_after_end = true, now);
    now += SECOND;
    c.tick(now);
    assert_eq!(c.slider().current_index(), 0);
    settle(&mut c, now);
    assert_eq!(c.slider().scroll_left(), Some(0));
}

#[test]
fn attach_before_track_is_measured_latches_but_does_not_scroll() {
    let mut c = Controller::new(SliderOptions::new().with_auto_scroll(true));
    assert_eq!(c.attach(0), None);
    assert!(c.slider().auto_scrolling_started());
    assert!(c.is_autoplay_running());
    assert_eq!(c.slider().current_index(), 0);

    c.on_slot_change(10, Some(100));
    c.on_track_resized(TrackMetrics::new(0, 1000, 300));
    assert!(c.tick(2 * SECOND).autoplay_fired);
    assert_eq!(c.slider().current_index(), 1);
}

#[test]
fn pause_on_hover_skips_ticks_until_pointer_leaves() {
    let mut c = controller(
        SliderOptions::new()
            .with_auto_scroll(true)
            .with_pause_on_hover(true),
    );
    c.attach(0);
    settle(&mut c, 0);
    assert_eq!(c.slider().current_index(), 1);

    c.handle(SliderEvent::PointerEnter, 500);
    for n in 1..=3 {
        let tick = c.tick(n * 2 * SECOND);
        assert!(tick.autoplay_fired);
        assert_eq!(tick.scroll_left, None);
    }
    assert_eq!(c.slider().current_index(), 1);
    assert_eq!(c.slider().scroll_left(), Some(100));

    c.handle(SliderEvent::PointerLeave, 7 * SECOND);
    c.tick(8 * SECOND);
    assert_eq!(c.slider().current_index(), 2);
}

#[test]
fn hovering_without_pause_on_hover_keeps_autoplay_going() {
    let mut c = controller(SliderOptions::new().with_auto_scroll(true));
    c.attach(0);
    c.set_hovering(true);
    c.tick(2 * SECOND);
    assert_eq!(c.slider().current_index(), 2);
}

#[test]
fn toggling_auto_scroll_starts_timer_exactly_once() {
    let mut c = controller(SliderOptions::new());
    assert_eq!(c.attach(0), None);
    assert!(!c.is_autoplay_running());

    let started = c.update_options(|o| o.auto_scroll = true, 100);
    assert_eq!(started, Some(ScrollCommand::smooth(100)));
    assert_eq!(c.update_options(|o| o.auto_scroll = false, 200), None);
    assert_eq!(c.update_options(|o| o.auto_scroll = true, 300), None);
    assert_eq!(c.slider().current_index(), 1);

    // One timer, phased from the first start at t=100.
    let mut fired = 0;
    for now in (100..=6100).step_by(100) {
        if c.tick(now).autoplay_fired {
            fired += 1;
        }
    }
    assert_eq!(fired, 3);
    assert_eq!(c.slider().current_index(), 4);
}

#[test]
fn enabling_auto_scroll_while_detached_waits_for_attach() {
    let mut c = controller(SliderOptions::new());
    assert_eq!(c.update_options(|o| o.auto_scroll = true, 0), None);
    assert!(!c.is_autoplay_running());

    assert_eq!(c.attach(50), Some(ScrollCommand::smooth(100)));
    assert!(c.is_autoplay_running());
}

#[test]
fn detach_releases_timer_and_reattach_restarts_it() {
    let mut c = controller(SliderOptions::new().with_auto_scroll(true));
    c.attach(0);
    settle(&mut c, 0);
    c.detach();
    assert!(!c.is_attached());
    assert!(!c.is_autoplay_running());
    assert!(!c.is_recount_pending());
    assert!(!c.slider().auto_scrolling_started());

    for n in 1..=5 {
        let tick = c.tick(n * 2 * SECOND);
        assert_eq!(tick, Tick::default());
    }
    assert_eq!(c.slider().current_index(), 1);

    assert_eq!(
        c.handle(SliderEvent::Attached, 20 * SECOND),
        Some(ScrollCommand::smooth(200))
    );
    assert!(c.is_autoplay_running());
    assert!(c.tick(22 * SECOND).autoplay_fired);
}

#[test]
fn detach_clears_hover_so_reattached_autoplay_is_not_paused() {
    let mut c = controller(
        SliderOptions::new()
            .with_auto_scroll(true)
            .with_pause_on_hover(true),
    );
    c.attach(0);
    settle(&mut c, 0);
    c.handle(SliderEvent::PointerEnter, 500);
    // The pointer leaves together with the element, so no PointerLeave arrives.
    c.detach();
    assert!(!c.slider().is_hovering());

    assert_eq!(c.attach(10 * SECOND), Some(ScrollCommand::smooth(200)));
    settle(&mut c, 10 * SECOND);
    assert_eq!(c.slider().current_index(), 2);
    let tick = c.tick(12 * SECOND);
    assert!(tick.autoplay_fired);
    assert_eq!(c.slider().current_index(), 3);
}

#[test]
fn detach_cancels_running_animation() {
    let mut c = controller(SliderOptions::new());
    c.attach(0);
    c.scroll_to_right(0);
    assert!(c.is_animating());
    c.handle(SliderEvent::Detached, 50);
    assert!(!c.is_animating());
    assert_eq!(c.tick(1000).scroll_left, None);
}

#[test]
fn recount_fallback_fires_once_after_delay() {
    let mut c = controller(SliderOptions::new());
    c.attach(10);
    assert!(c.is_recount_pending());
    // Mount count first, then the fallback once the delay has passed.
    assert!(c.tick(10).recount_requested);
    assert!(c.is_recount_pending());
    assert!(!c.tick(500).recount_requested);
    assert!(!c.tick(1009).recount_requested);
    assert!(c.tick(1010).recount_requested);
    assert!(!c.tick(5000).recount_requested);
    assert!(!c.is_recount_pending());
}

#[test]
fn recount_fallback_is_cancelled_by_detach() {
    let mut c = controller(SliderOptions::new());
    c.attach(0);
    c.detach();
    assert!(!c.tick(5000).recount_requested);
}

#[test]
fn smooth_scroll_moves_monotonically_to_target() {
    let mut c = controller(SliderOptions::new().with_items_to_scroll(3));
    c.attach(0);
    let cmd = c.scroll_to_right(0);
    assert_eq!(cmd, Some(ScrollCommand::smooth(300)));

    let mut last = 0;
    for now in [0u64, 20, 50, 100, 150, 199] {
        let tick = c.tick(now);
        let off = tick.scroll_left.unwrap();
        assert!(off >= last);
        assert!(off <= 300);
        last = off;
    }
    assert!(c.is_animating());
    assert_eq!(c.tick(200).scroll_left, Some(300));
    assert!(!c.is_animating());
    assert_eq!(c.tick(250).scroll_left, None);
}

#[test]
fn rapid_clicks_retarget_from_live_offset() {
    let mut c = controller(SliderOptions::new());
    c.attach(0);
    c.scroll_to_right(0);
    let mid = c.tick(100).scroll_left.unwrap();
    assert!(mid > 0 && mid < 100);

    let cmd = c.scroll_to_right(100);
    assert_eq!(cmd, Some(ScrollCommand::smooth(mid + 100)));
    assert_eq!(c.slider().current_index(), 2);

    settle(&mut c, 100);
    assert_eq!(c.slider().scroll_left(), Some(mid + 100));
}

#[test]
fn user_scroll_cancels_animation() {
    let mut c = controller(SliderOptions::new());
    c.attach(0);
    c.scroll_to_right(0);
    c.handle(SliderEvent::Scrolled(450), 50);
    assert!(!c.is_animating());
    assert_eq!(c.slider().scroll_left(), Some(450));
    assert_eq!(c.tick(500).scroll_left, None);
}

#[test]
fn instant_commands_jump_without_animating() {
    let mut c = controller(SliderOptions::new());
    c.attach(0);
    let applied = c.run(Some(ScrollCommand::instant(250)), 0);
    assert_eq!(applied, Some(ScrollCommand::instant(250)));
    assert!(!c.is_animating());
    assert_eq!(c.slider().scroll_left(), Some(250));
}

#[test]
fn events_drive_navigation_and_pagination() {
    let mut c = controller(SliderOptions::new().with_show_dots(true).with_show_arrows(true));
    c.attach(0);

    assert_eq!(
        c.handle(SliderEvent::DotClicked(3), 0),
        Some(ScrollCommand::smooth(300))
    );
    settle(&mut c, 0);
    assert_eq!(c.view().active_dot(), Some(3));

    c.handle(SliderEvent::ArrowClicked(Direction::Left), 1000);
    settle(&mut c, 1000);
    assert_eq!(c.slider().current_index(), 2);
    assert_eq!(c.slider().scroll_left(), Some(200));

    c.handle(SliderEvent::ArrowClicked(Direction::Right), 2000);
    assert_eq!(c.slider().current_index(), 3);

    c.handle(
        SliderEvent::SlotChanged {
            count: 6,
            first_child_width: Some(100),
        },
        3000,
    );
    assert_eq!(c.view().dots.len(), 6);

    c.handle(SliderEvent::PointerEnter, 3000);
    assert!(c.slider().is_hovering());
    c.handle(SliderEvent::PointerLeave, 3000);
    assert!(!c.slider().is_hovering());
}

#[test]
fn track_resize_clamps_running_animation_target() {
    let mut c = controller(SliderOptions::new());
    c.attach(0);
    c.handle_dot_click(6, 0);
    c.on_track_resized(TrackMetrics::new(0, 700, 300));
    settle(&mut c, 0);
    assert_eq!(c.slider().scroll_left(), Some(400));
}

#[test]
fn interval_coalesces_missed_periods() {
    let mut i = Interval::new(0, 2000);
    assert!(!i.poll(1999));
    assert!(i.poll(2000));
    assert_eq!(i.next_due_ms(), 4000);
    assert!(i.poll(9000));
    assert_eq!(i.next_due_ms(), 10000);
    assert!(!i.poll(9500));
}

#[test]
fn interval_period_has_a_floor() {
    let mut i = Interval::new(100, 0);
    assert_eq!(i.period_ms(), 1);
    assert!(i.poll(101));
    assert!(i.poll(102));
}

#[test]
fn autoplay_holds_a_single_interval() {
    let mut a = Autoplay::new();
    assert!(a.start(0, 1000));
    assert!(!a.start(10, 50));
    assert_eq!(a.interval().map(|i| i.period_ms()), Some(1000));
    a.stop();
    assert!(!a.poll(5000));
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseInOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        assert!(easing.apply(0.5) > 0.0 && easing.apply(0.5) < 1.0);
    }
}

#[test]
fn smooth_scroll_retarget_starts_from_current_offset() {
    let mut s = SmoothScroll::new(0, 1000, 0, 100, Easing::Linear);
    assert_eq!(s.offset_at(50), 500);
    s.retarget(50, 0);
    assert_eq!(s.from, 500);
    assert_eq!(s.offset_at(100), 250);
    assert_eq!(s.offset_at(150), 0);
}
