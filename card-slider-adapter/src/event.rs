use card_slider::{Direction, TrackMetrics};

/// UI events a host forwards to [`crate::Controller::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SliderEvent {
    // Lifecycle
    Attached,
    Detached,

    // Navigation
    ArrowClicked(Direction),
    DotClicked(usize),

    // Pointer over the track
    PointerEnter,
    PointerLeave,

    // Content / geometry reporting
    SlotChanged {
        count: usize,
        first_child_width: Option<u32>,
    },
    Scrolled(u64),
    TrackResized(TrackMetrics),
}
