use alloc::sync::Arc;

use crate::slider::Slider;

/// A callback fired after any state or configuration change.
///
/// This is the single update hook adapters re-render from: dot highlighting, item count and arrow
/// visibility are all derived from the slider passed in.
pub type OnChangeCallback = Arc<dyn Fn(&Slider) + Send + Sync>;

/// Configuration for [`crate::Slider`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak a field and call
/// `Slider::set_options` freely.
pub struct SliderOptions {
    /// Render previous/next controls.
    pub show_arrows: bool,
    /// Scroll back to the first card when scrolling right at the end of the track.
    pub start_again_after_end: bool,
    /// Enable the autoplay timer.
    pub auto_scroll: bool,
    /// Autoplay interval in seconds.
    pub auto_scroll_seconds: f64,
    /// How many cards one navigation step moves.
    pub items_to_scroll: u32,
    /// Skip autoplay ticks while the pointer is over the track.
    pub pause_on_hover: bool,
    /// Render pagination indicators.
    pub show_dots: bool,

    pub on_change: Option<OnChangeCallback>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SliderOptions {
    fn clone(&self) -> Self {
        Self {
            show_arrows: self.show_arrows,
            start_again_after_end: self.start_again_after_end,
            auto_scroll: self.auto_scroll,
            auto_scroll_seconds: self.auto_scroll_seconds,
            items_to_scroll: self.items_to_scroll,
            pause_on_hover: self.pause_on_hover,
            show_dots: self.show_dots,
            on_change: self.on_change.clone(),
        }
    }
}

impl SliderOptions {
    pub fn new() -> Self {
        Self {
            show_arrows: false,
            start_again_after_end: false,
            auto_scroll: false,
            auto_scroll_seconds: 2.0,
            items_to_scroll: 1,
            pause_on_hover: false,
            show_dots: false,
            on_change: None,
        }
    }

    pub fn with_show_arrows(mut self, show_arrows: bool) -> Self {
        self.show_arrows = show_arrows;
        self
    }

    pub fn with_start_again_after_end(mut self, start_again_after_end: bool) -> Self {
        self.start_again_after_end = start_again_after_end;
        self
    }

    pub fn with_auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn with_auto_scroll_seconds(mut self, seconds: f64) -> Self {
        self.auto_scroll_seconds = seconds;
        self
    }

    pub fn with_items_to_scroll(mut self, items_to_scroll: u32) -> Self {
        self.items_to_scroll = items_to_scroll;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_show_dots(mut self, show_dots: bool) -> Self {
        self.show_dots = show_dots;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Slider) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// The autoplay period in milliseconds.
    ///
    /// Values are not validated: negative or NaN seconds become `0`.
    pub fn auto_scroll_interval_ms(&self) -> u64 {
        (self.auto_scroll_seconds * 1000.0) as u64
    }
}

impl core::fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderOptions")
            .field("show_arrows", &self.show_arrows)
            .field("start_again_after_end", &self.start_again_after_end)
            .field("auto_scroll", &self.auto_scroll)
            .field("auto_scroll_seconds", &self.auto_scroll_seconds)
            .field("items_to_scroll", &self.items_to_scroll)
            .field("pause_on_hover", &self.pause_on_hover)
            .field("show_dots", &self.show_dots)
            .finish_non_exhaustive()
    }
}
