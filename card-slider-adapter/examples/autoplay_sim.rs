use card_slider::{SliderOptions, TrackMetrics};
use card_slider_adapter::{Controller, SliderEvent};

fn main() {
    // Simulate a host component driving the controller from a 60fps frame loop.
    let mut c = Controller::new(
        SliderOptions::new()
            .with_auto_scroll(true)
            .with_auto_scroll_seconds(1.0)
            .with_pause_on_hover(true)
            .with_start_again_after_end(true),
    );

    // Children render late: the track exists, but the slot is still empty.
    c.handle(SliderEvent::TrackResized(TrackMetrics::new(0, 0, 300)), 0);
    c.handle(SliderEvent::Attached, 0);

    let mut now_ms = 0u64;
    while now_ms < 8_000 {
        now_ms += 16;
        let tick = c.tick(now_ms);

        if tick.recount_requested {
            // The host counts its slotted children again and re-measures the track. The cards
            // show up half a second after mount, so only the fallback recount sees them.
            let rendered = now_ms >= 500;
            let count = if rendered { 6 } else { 0 };
            let first_child_width = rendered.then_some(100);
            c.handle(
                SliderEvent::SlotChanged {
                    count,
                    first_child_width,
                },
                now_ms,
            );
            c.handle(
                SliderEvent::TrackResized(TrackMetrics::new(0, 100 * count as u64, 300)),
                now_ms,
            );
            println!("t={now_ms} recount: items={}", c.slider().total_items());
        }
        if (3_000..3_016).contains(&now_ms) {
            c.handle(SliderEvent::PointerEnter, now_ms);
            println!("t={now_ms} pointer enter");
        }
        if (5_000..5_016).contains(&now_ms) {
            c.handle(SliderEvent::PointerLeave, now_ms);
            println!("t={now_ms} pointer leave");
        }
        if tick.autoplay_fired {
            println!(
                "t={now_ms} autoplay index={} scroll_left={:?}",
                c.slider().current_index(),
                c.slider().scroll_left()
            );
        }
    }

    c.handle(SliderEvent::Detached, now_ms);
    println!("detached: autoplay_running={}", c.is_autoplay_running());
}
