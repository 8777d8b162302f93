use card_slider::{
    Direction, ScrollBehavior, ScrollCommand, Slider, SliderOptions, SliderView, TrackMetrics,
};

use crate::{Autoplay, Easing, SliderEvent, SmoothScroll, Timeout};

/// Delay of the recount fallback that catches children rendered after mount.
pub const DEFAULT_RECOUNT_DELAY_MS: u64 = 1000;

pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 300;

/// Adapter-level knobs that have no counterpart in the slider's own options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    /// Duration of smooth scroll animations. `0` still animates over a single millisecond.
    pub smooth_scroll_ms: u64,
    pub easing: Easing,
    pub recount_delay_ms: u64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            smooth_scroll_ms: DEFAULT_SMOOTH_SCROLL_MS,
            easing: Easing::default(),
            recount_delay_ms: DEFAULT_RECOUNT_DELAY_MS,
        }
    }
}

impl ControllerOptions {
    pub fn with_smooth_scroll_ms(mut self, smooth_scroll_ms: u64) -> Self {
        self.smooth_scroll_ms = smooth_scroll_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_recount_delay_ms(mut self, recount_delay_ms: u64) -> Self {
        self.recount_delay_ms = recount_delay_ms;
        self
    }
}

/// What happened during one [`Controller::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// The offset to apply to the real scroll container, when an animation moved it.
    pub scroll_left: Option<u64>,
    /// The autoplay timer fired (whether or not it scrolled).
    pub autoplay_fired: bool,
    /// Report the slot contents via `on_slot_change`. Set on the first tick after `attach`
    /// (the mount count) and again when the recount fallback is due.
    pub recount_requested: bool,
}

/// A framework-neutral controller that wraps a `card_slider::Slider` and owns its timers.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `attach` / `detach` when the component enters or leaves the document
/// - `handle` (or the individual methods) for UI events
/// - `tick(now_ms)` each frame/timer tick, applying `Tick::scroll_left` to the real container
///
/// Detaching releases the autoplay timer, the recount fallback and any running animation.
#[derive(Clone, Debug)]
pub struct Controller {
    slider: Slider,
    options: ControllerOptions,
    animation: Option<SmoothScroll>,
    autoplay: Autoplay,
    recount: Option<Timeout>,
    mount_recount: bool,
    attached: bool,
}

impl Controller {
    pub fn new(options: SliderOptions) -> Self {
        Self::from_slider(Slider::new(options))
    }

    pub fn from_slider(slider: Slider) -> Self {
        Self {
            slider,
            options: ControllerOptions::default(),
            animation: None,
            autoplay: Autoplay::new(),
            recount: None,
            mount_recount: false,
            attached: false,
        }
    }

    pub fn with_controller_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    pub fn into_slider(self) -> Slider {
        self.slider
    }

    pub fn controller_options(&self) -> ControllerOptions {
        self.options
    }

    pub fn set_controller_options(&mut self, options: ControllerOptions) {
        self.options = options;
    }

    pub fn view(&self) -> SliderView {
        self.slider.view()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn is_recount_pending(&self) -> bool {
        self.mount_recount || self.recount.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// The component entered the document.
    ///
    /// Requests the mount count on the next `tick`, schedules the recount fallback and starts
    /// autoplay when `auto_scroll` is set. Returns the first autoplay step, if any.
    pub fn attach(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if self.attached {
            return None;
        }
        adebug!(now_ms, "Controller::attach");
        self.attached = true;
        self.mount_recount = true;
        self.recount = Some(Timeout::new(now_ms, self.options.recount_delay_ms));
        self.slider.refresh();
        if self.slider.options().auto_scroll {
            return self.start_auto_scrolling(now_ms);
        }
        None
    }

    /// The component left the document. Releases every timer, drops pending recounts and clears
    /// the hover flag and the autoplay latch, so a later `attach` with `auto_scroll` starts
    /// autoplay again.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        adebug!("Controller::detach");
        self.attached = false;
        self.autoplay.stop();
        self.recount = None;
        self.mount_recount = false;
        self.animation = None;
        self.slider.batch_update(|slider| {
            slider.set_hovering(false);
            slider.reset_auto_scrolling();
        });
    }

    /// Replaces the slider options.
    ///
    /// When `auto_scroll` changes from off to on while attached, autoplay starts unless it already
    /// ran during this attachment. Turning `auto_scroll` off does not stop a running timer.
    pub fn set_options(&mut self, options: SliderOptions, now_ms: u64) -> Option<ScrollCommand> {
        let was_auto_scroll = self.slider.options().auto_scroll;
        self.slider.set_options(options);
        if self.attached && !was_auto_scroll && self.slider.should_start_auto_scrolling() {
            return self.start_auto_scrolling(now_ms);
        }
        None
    }

    /// Clones the current slider options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut SliderOptions),
        now_ms: u64,
    ) -> Option<ScrollCommand> {
        let mut next = self.slider.options().clone();
        f(&mut next);
        self.set_options(next, now_ms)
    }

    /// Starts the autoplay timer: one right step now, then one per interval.
    ///
    /// Does nothing while detached or when autoplay already started during this attachment.
    pub fn start_auto_scrolling(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if !self.attached || !self.slider.begin_auto_scrolling() {
            return None;
        }
        self.advance_animation(now_ms);
        let cmd = self.slider.scroll_to_right();
        let period_ms = self.slider.options().auto_scroll_interval_ms();
        self.autoplay.start(now_ms, period_ms);
        self.run(cmd, now_ms)
    }

    pub fn scroll_to_left(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        self.advance_animation(now_ms);
        let cmd = self.slider.scroll_to_left();
        self.run(cmd, now_ms)
    }

    pub fn scroll_to_right(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        self.advance_animation(now_ms);
        let cmd = self.slider.scroll_to_right();
        self.run(cmd, now_ms)
    }

    pub fn handle_dot_click(&mut self, index: usize, now_ms: u64) -> Option<ScrollCommand> {
        self.advance_animation(now_ms);
        let cmd = self.slider.handle_dot_click(index);
        self.run(cmd, now_ms)
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.slider.set_hovering(hovering);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user drag).
    ///
    /// This cancels any running animation.
    pub fn on_scroll(&mut self, scroll_left: u64) {
        self.cancel_animation();
        self.slider.apply_scroll_left(scroll_left);
    }

    pub fn on_track_resized(&mut self, track: TrackMetrics) {
        self.slider.set_track(track);
        if let Some(animation) = self.animation.as_mut() {
            animation.to = track.clamp_scroll_left(animation.to);
        }
    }

    pub fn on_slot_change(&mut self, count: usize, first_child_width: Option<u32>) {
        self.slider.on_slot_change(count, first_child_width);
    }

    /// Applies a scroll command to the slider: smooth commands animate from the live offset,
    /// instant ones jump.
    ///
    /// A smooth command issued while another animation runs replaces it.
    pub fn run(&mut self, cmd: Option<ScrollCommand>, now_ms: u64) -> Option<ScrollCommand> {
        let cmd = cmd?;
        match cmd.behavior {
            ScrollBehavior::Instant => {
                self.cancel_animation();
                self.slider.apply_scroll_left(cmd.left);
            }
            ScrollBehavior::Smooth => {
                let from = self.slider.scroll_left()?;
                match self.animation.as_mut() {
                    Some(animation) => animation.retarget(now_ms, cmd.left),
                    None => {
                        self.animation = Some(SmoothScroll::new(
                            from,
                            cmd.left,
                            now_ms,
                            self.options.smooth_scroll_ms,
                            self.options.easing,
                        ));
                    }
                }
                atrace!(from, to = cmd.left, now_ms, "Controller::run: smooth scroll");
            }
        }
        Some(cmd)
    }

    /// Moves the track along the running animation, so commands computed next start from the
    /// live offset.
    fn advance_animation(&mut self, now_ms: u64) -> Option<u64> {
        let animation = self.animation?;
        self.slider.apply_scroll_left(animation.offset_at(now_ms));
        if animation.is_finished(now_ms) {
            self.animation = None;
        }
        self.slider.scroll_left()
    }

    /// Advances animations and timers.
    pub fn tick(&mut self, now_ms: u64) -> Tick {
        let mut tick = Tick {
            scroll_left: self.advance_animation(now_ms),
            ..Tick::default()
        };

        if self.attached && self.autoplay.poll(now_ms) {
            atrace!(now_ms, "Controller::tick: autoplay");
            tick.autoplay_fired = true;
            let cmd = self.slider.auto_scroll_step();
            self.run(cmd, now_ms);
        }

        if self.mount_recount {
            atrace!(now_ms, "Controller::tick: mount recount");
            self.mount_recount = false;
            tick.recount_requested = true;
        }
        if self.recount.is_some_and(|t| t.is_due(now_ms)) {
            atrace!(now_ms, "Controller::tick: recount fallback");
            self.recount = None;
            tick.recount_requested = true;
        }

        tick
    }

    /// Dispatches a UI event. Returns the scroll command it produced, if any.
    pub fn handle(&mut self, event: SliderEvent, now_ms: u64) -> Option<ScrollCommand> {
        match event {
            SliderEvent::Attached => self.attach(now_ms),
            SliderEvent::Detached => {
                self.detach();
                None
            }
            SliderEvent::ArrowClicked(Direction::Left) => self.scroll_to_left(now_ms),
            SliderEvent::ArrowClicked(Direction::Right) => self.scroll_to_right(now_ms),
            SliderEvent::DotClicked(index) => self.handle_dot_click(index, now_ms),
            SliderEvent::PointerEnter => {
                self.set_hovering(true);
                None
            }
            SliderEvent::PointerLeave => {
                self.set_hovering(false);
                None
            }
            SliderEvent::SlotChanged {
                count,
                first_child_width,
            } => {
                self.on_slot_change(count, first_child_width);
                None
            }
            SliderEvent::Scrolled(scroll_left) => {
                self.on_scroll(scroll_left);
                None
            }
            SliderEvent::TrackResized(track) => {
                self.on_track_resized(track);
                None
            }
        }
    }
}
