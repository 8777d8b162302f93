use crate::TrackMetrics;

/// Runtime state of a slider.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    /// The current page index. Not clamped: left steps past the start go negative, and nothing
    /// stops it from exceeding `total_items`.
    pub current_index: i64,
    /// Number of slotted children, as last reported by the adapter.
    pub total_items: usize,
    pub hovering: bool,
    /// One-way latch that keeps a second autoplay timer from being created.
    pub auto_scrolling_started: bool,
}

/// A combined snapshot of runtime state + measured geometry.
///
/// Useful for restoring a slider across re-attachment or sessions without coupling the engine to
/// any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderSnapshot {
    pub state: SliderState,
    pub track: Option<TrackMetrics>,
    pub first_child_width: Option<u32>,
}
