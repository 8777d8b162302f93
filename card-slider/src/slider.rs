use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{
    ArrowButton, Direction, Dot, ICON_STYLESHEET_HREF, ScrollCommand, SliderOptions,
    SliderSnapshot, SliderState, SliderView, TrackMetrics,
};

/// A headless card slider.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by reporting track geometry, slotted children and hover changes.
/// - Navigation returns [`ScrollCommand`]s; the adapter applies them to its scroll container and
///   reports the resulting offsets back via [`Slider::apply_scroll_left`].
///
/// Until a track has been reported (see [`Slider::set_track`]), navigation is a no-op.
///
/// For autoplay timers, smooth scrolling and attach/detach handling, see the
/// `card-slider-adapter` crate.
#[derive(Clone, Debug)]
pub struct Slider {
    options: SliderOptions,
    state: SliderState,
    track: Option<TrackMetrics>,
    first_child_width: Option<u32>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Slider {
    pub fn new(options: SliderOptions) -> Self {
        cdebug!(
            show_arrows = options.show_arrows,
            show_dots = options.show_dots,
            auto_scroll = options.auto_scroll,
            items_to_scroll = options.items_to_scroll,
            "Slider::new"
        );
        Self {
            options,
            state: SliderState::default(),
            track: None,
            first_child_width: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SliderOptions) {
        self.options = options;
        ctrace!(
            show_arrows = self.options.show_arrows,
            show_dots = self.options.show_dots,
            auto_scroll = self.options.auto_scroll,
            items_to_scroll = self.options.items_to_scroll,
            "Slider::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SliderOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Slider) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Adapters typically report geometry, slot contents and hover state together when a frame
    /// settles; batching keeps that to one re-render.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Re-runs the update hook without changing anything.
    ///
    /// Call this from the host's render/update cycle so derived UI (dots, counts) is recomputed.
    pub fn refresh(&self) {
        self.notify();
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn current_index(&self) -> i64 {
        self.state.current_index
    }

    pub fn total_items(&self) -> usize {
        self.state.total_items
    }

    pub fn is_hovering(&self) -> bool {
        self.state.hovering
    }

    pub fn auto_scrolling_started(&self) -> bool {
        self.state.auto_scrolling_started
    }

    pub fn track(&self) -> Option<TrackMetrics> {
        self.track
    }

    pub fn scroll_left(&self) -> Option<u64> {
        self.track.map(|t| t.scroll_left)
    }

    pub fn first_child_width(&self) -> Option<u32> {
        self.first_child_width
    }

    /// Reports the track geometry. The scroll offset is clamped to the content bounds.
    pub fn set_track(&mut self, mut track: TrackMetrics) {
        let max = track.max_scroll_left();
        if track.scroll_left > max {
            cwarn!(
                scroll_left = track.scroll_left,
                max,
                "set_track: scroll offset beyond content bounds"
            );
            track.scroll_left = max;
        }
        ctrace!(
            scroll_left = track.scroll_left,
            scroll_width = track.scroll_width,
            client_width = track.client_width,
            "set_track"
        );
        self.track = Some(track);
        self.notify();
    }

    /// Forgets the track (e.g. the container was unmounted). Navigation becomes a no-op.
    pub fn clear_track(&mut self) {
        self.track = None;
        self.notify();
    }

    /// Applies a scroll offset reported by the UI layer (user drag, animation frame).
    ///
    /// The offset is clamped to `[0, max_scroll_left]`. Returns `false` when no track is known.
    pub fn apply_scroll_left(&mut self, left: u64) -> bool {
        let Some(track) = self.track.as_mut() else {
            return false;
        };
        track.scroll_left = track.clamp_scroll_left(left);
        ctrace!(left, applied = track.scroll_left, "apply_scroll_left");
        self.notify();
        true
    }

    pub fn set_first_child_width(&mut self, width: Option<u32>) {
        self.first_child_width = width;
        self.notify();
    }

    pub fn set_total_items(&mut self, count: usize) {
        self.state.total_items = count;
        self.notify();
    }

    /// Recounts slotted children.
    ///
    /// Call on mount, whenever the content slot changes, and once more after the late-render
    /// fallback delay. `first_child_width` is the rendered width of the first slotted child, or
    /// `None` when the slot is empty.
    pub fn on_slot_change(&mut self, count: usize, first_child_width: Option<u32>) {
        ctrace!(count, first_child_width = ?first_child_width, "on_slot_change");
        self.state.total_items = count;
        self.first_child_width = first_child_width;
        self.notify();
    }

    /// Scroll distance per navigation step: first child width × `items_to_scroll`.
    pub fn step_distance(&self) -> u64 {
        let width = self.first_child_width.unwrap_or(0) as u64;
        width.saturating_mul(self.options.items_to_scroll as u64)
    }

    fn items_to_scroll(&self) -> i64 {
        self.options.items_to_scroll as i64
    }

    /// Steps one page to the left.
    ///
    /// Scrolls only when the track is not already at offset 0, but the index is decremented either
    /// way (and may go negative).
    pub fn scroll_to_left(&mut self) -> Option<ScrollCommand> {
        let track = self.track?;
        let cmd = if track.scroll_left > 0 {
            Some(ScrollCommand::smooth(
                track.scroll_left.saturating_sub(self.step_distance()),
            ))
        } else {
            None
        };
        self.state.current_index = self
            .state
            .current_index
            .saturating_sub(self.items_to_scroll());
        ctrace!(
            from = track.scroll_left,
            to = ?cmd.map(|c| c.left),
            index = self.state.current_index,
            "scroll_to_left"
        );
        self.notify();
        cmd
    }

    /// Steps one page to the right.
    ///
    /// At the right bound this either wraps to offset 0 (`start_again_after_end`) or does nothing.
    pub fn scroll_to_right(&mut self) -> Option<ScrollCommand> {
        let track = self.track?;
        let cmd = if track.scroll_left < track.max_scroll_left() {
            let to = track
                .clamp_scroll_left(track.scroll_left.saturating_add(self.step_distance()));
            self.state.current_index = self
                .state
                .current_index
                .saturating_add(self.items_to_scroll());
            ScrollCommand::smooth(to)
        } else if self.options.start_again_after_end {
            self.state.current_index = 0;
            ScrollCommand::smooth(0)
        } else {
            return None;
        };
        ctrace!(
            from = track.scroll_left,
            to = cmd.left,
            index = self.state.current_index,
            "scroll_to_right"
        );
        self.notify();
        Some(cmd)
    }

    pub fn scroll(&mut self, direction: Direction) -> Option<ScrollCommand> {
        match direction {
            Direction::Left => self.scroll_to_left(),
            Direction::Right => self.scroll_to_right(),
        }
    }

    /// Jumps to the page of a pagination indicator.
    ///
    /// `index` is not checked against `total_items`.
    pub fn handle_dot_click(&mut self, index: usize) -> Option<ScrollCommand> {
        let track = self.track?;
        let width = self.first_child_width.unwrap_or(0) as u64;
        let to = track.clamp_scroll_left(width.saturating_mul(index as u64));
        self.state.current_index = i64::try_from(index).unwrap_or(i64::MAX);
        ctrace!(index, to, "handle_dot_click");
        self.notify();
        Some(ScrollCommand::smooth(to))
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if self.state.hovering == hovering {
            return;
        }
        self.state.hovering = hovering;
        self.notify();
    }

    /// Whether autoplay should be started now: enabled and not already running.
    pub fn should_start_auto_scrolling(&self) -> bool {
        self.options.auto_scroll && !self.state.auto_scrolling_started
    }

    /// Trips the autoplay latch. Returns `true` only for the call that flipped it.
    pub fn begin_auto_scrolling(&mut self) -> bool {
        if self.state.auto_scrolling_started {
            return false;
        }
        self.state.auto_scrolling_started = true;
        cdebug!(
            interval_ms = self.options.auto_scroll_interval_ms(),
            "begin_auto_scrolling"
        );
        self.notify();
        true
    }

    /// Clears the autoplay latch. Adapters call this after releasing their timer.
    pub fn reset_auto_scrolling(&mut self) {
        if !self.state.auto_scrolling_started {
            return;
        }
        self.state.auto_scrolling_started = false;
        self.notify();
    }

    pub fn is_autoplay_paused(&self) -> bool {
        self.options.pause_on_hover && self.state.hovering
    }

    /// One autoplay timer tick: a right step, unless paused by hover.
    pub fn auto_scroll_step(&mut self) -> Option<ScrollCommand> {
        if self.is_autoplay_paused() {
            ctrace!("auto_scroll_step: paused on hover");
            return None;
        }
        self.scroll_to_right()
    }

    pub fn dot_count(&self) -> usize {
        self.state.total_items
    }

    /// The indicator matching `current_index`, if it is in `[0, total_items)`.
    pub fn active_dot(&self) -> Option<usize> {
        usize::try_from(self.state.current_index)
            .ok()
            .filter(|&i| i < self.state.total_items)
    }

    /// Iterates over pagination indicators without allocations.
    pub fn for_each_dot(&self, mut f: impl FnMut(Dot)) {
        let active = self.active_dot();
        for index in 0..self.state.total_items {
            f(Dot {
                index,
                active: active == Some(index),
            });
        }
    }

    /// Collects pagination indicators into `out` (clears `out` first).
    pub fn collect_dots(&self, out: &mut Vec<Dot>) {
        out.clear();
        out.reserve(self.state.total_items);
        self.for_each_dot(|d| out.push(d));
    }

    /// Builds the render model for the current state.
    pub fn view(&self) -> SliderView {
        let mut dots = Vec::new();
        if self.options.show_dots {
            self.collect_dots(&mut dots);
        }
        SliderView {
            arrows: self
                .options
                .show_arrows
                .then(|| [ArrowButton::left(), ArrowButton::right()]),
            dots,
            icon_stylesheet: ICON_STYLESHEET_HREF,
        }
    }

    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            state: self.state,
            track: self.track,
            first_child_width: self.first_child_width,
        }
    }

    /// Restores state and geometry from a previously captured snapshot.
    pub fn restore_snapshot(&mut self, snapshot: SliderSnapshot) {
        self.batch_update(|s| {
            s.state = snapshot.state;
            s.first_child_width = snapshot.first_child_width;
            match snapshot.track {
                Some(track) => s.set_track(track),
                None => s.clear_track(),
            }
        });
    }
}
