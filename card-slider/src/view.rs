use alloc::vec::Vec;

use crate::Direction;

/// Stylesheet that provides the arrow glyphs referenced by [`ArrowButton::icon_class`].
pub const ICON_STYLESHEET_HREF: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css";

/// A pagination indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrowButton {
    pub direction: Direction,
    pub icon_class: &'static str,
}

impl ArrowButton {
    pub fn left() -> Self {
        Self {
            direction: Direction::Left,
            icon_class: "fas fa-chevron-left fa-sm",
        }
    }

    pub fn right() -> Self {
        Self {
            direction: Direction::Right,
            icon_class: "fas fa-chevron-right fa-sm",
        }
    }
}

/// Everything an adapter needs to render one frame of the slider chrome.
///
/// Built fresh from state on each call to `Slider::view`; nothing here is patched in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SliderView {
    /// `Some([left, right])` when arrows are enabled.
    pub arrows: Option<[ArrowButton; 2]>,
    /// One entry per slotted child when dots are enabled; empty otherwise.
    pub dots: Vec<Dot>,
    pub icon_stylesheet: &'static str,
}

impl SliderView {
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().find(|d| d.active).map(|d| d.index)
    }
}
