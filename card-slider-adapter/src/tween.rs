/// Easing curves for smooth scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseOutQuad,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// An in-flight smooth scroll of the track, sampled by the adapter's clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothScroll {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl SmoothScroll {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// The scroll offset at `now_ms`. Lands exactly on `to` once finished.
    pub fn offset_at(&self, now_ms: u64) -> u64 {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        let delta = (self.to as f64 - self.from as f64) * eased as f64;
        (self.from as f64 + delta).max(0.0) as u64
    }

    /// Restarts toward `to` from wherever the scroll is at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, to: u64) {
        let from = self.offset_at(now_ms);
        *self = Self::new(from, to, now_ms, self.duration_ms, self.easing);
    }
}
