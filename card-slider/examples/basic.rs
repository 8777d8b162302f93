use card_slider::{Slider, SliderOptions, TrackMetrics};

fn main() {
    // Eight 120px cards in a 360px wide track, stepping two cards at a time.
    let mut s = Slider::new(
        SliderOptions::new()
            .with_items_to_scroll(2)
            .with_start_again_after_end(true)
            .with_show_dots(true)
            .with_show_arrows(true),
    );
    s.on_slot_change(8, Some(120));
    s.set_track(TrackMetrics::new(0, 8 * 120, 360));

    for _ in 0..4 {
        if let Some(cmd) = s.scroll_to_right() {
            // A real adapter would animate towards `cmd.left`; jump there instead.
            s.apply_scroll_left(cmd.left);
        }
        println!(
            "scroll_left={:?} index={} active_dot={:?}",
            s.scroll_left(),
            s.current_index(),
            s.active_dot()
        );
    }

    if let Some(cmd) = s.handle_dot_click(3) {
        s.apply_scroll_left(cmd.left);
    }
    let view = s.view();
    println!("arrows={:?}", view.arrows.map(|a| a.map(|b| b.icon_class)));
    for dot in &view.dots {
        println!("dot {} {}", dot.index, if dot.active { "*" } else { "" });
    }
}
