/// A repeating task on an adapter-provided millisecond clock.
///
/// Nothing runs by itself: the owner calls [`Interval::poll`] from its tick and drops the value to
/// cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    period_ms: u64,
    next_due_ms: u64,
}

impl Interval {
    /// Schedules the first run one period after `start_ms`. Periods below 1 ms are raised to 1 ms.
    pub fn new(start_ms: u64, period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: start_ms.saturating_add(period_ms),
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Returns `true` when the task is due at `now_ms` and schedules the next run.
    ///
    /// If several periods were missed (e.g. a throttled background tab), they are coalesced into
    /// a single run and the schedule stays aligned to the original phase.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        let missed = (now_ms - self.next_due_ms) / self.period_ms;
        let advance = missed.saturating_add(1).saturating_mul(self.period_ms);
        self.next_due_ms = self.next_due_ms.saturating_add(advance);
        true
    }
}

/// A one-shot task on an adapter-provided millisecond clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeout {
    due_ms: u64,
}

impl Timeout {
    pub fn new(start_ms: u64, delay_ms: u64) -> Self {
        Self {
            due_ms: start_ms.saturating_add(delay_ms),
        }
    }

    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }
}
