#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// A scroll request for the track, to be applied by the adapter.
///
/// `left` is already clamped to `[0, TrackMetrics::max_scroll_left]` at the time the command was
/// issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub left: u64,
    pub behavior: ScrollBehavior,
}

impl ScrollCommand {
    pub fn smooth(left: u64) -> Self {
        Self {
            left,
            behavior: ScrollBehavior::Smooth,
        }
    }

    pub fn instant(left: u64) -> Self {
        Self {
            left,
            behavior: ScrollBehavior::Instant,
        }
    }
}

/// Geometry of the horizontally scrollable track, as measured by the adapter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackMetrics {
    /// Current horizontal scroll offset.
    pub scroll_left: u64,
    /// Total width of the scrollable content.
    pub scroll_width: u64,
    /// Visible width of the track.
    pub client_width: u32,
}

impl TrackMetrics {
    pub fn new(scroll_left: u64, scroll_width: u64, client_width: u32) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// The largest reachable scroll offset (`scroll_width - client_width`, saturating).
    pub fn max_scroll_left(&self) -> u64 {
        self.scroll_width.saturating_sub(self.client_width as u64)
    }

    pub fn clamp_scroll_left(&self, left: u64) -> u64 {
        left.min(self.max_scroll_left())
    }

    pub fn is_at_start(&self) -> bool {
        self.scroll_left == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.scroll_left >= self.max_scroll_left()
    }
}
