use crate::Interval;

/// The autoplay timer slot of a slider.
///
/// At most one interval is held; starting again replaces nothing and returns `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Autoplay {
    interval: Option<Interval>,
}

impl Autoplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    pub fn start(&mut self, now_ms: u64, period_ms: u64) -> bool {
        if self.interval.is_some() {
            awarn!(now_ms, "Autoplay::start: already running");
            return false;
        }
        let interval = Interval::new(now_ms, period_ms);
        adebug!(
            now_ms,
            period_ms = interval.period_ms(),
            "Autoplay::start"
        );
        self.interval = Some(interval);
        true
    }

    pub fn stop(&mut self) {
        if self.interval.take().is_some() {
            adebug!("Autoplay::stop");
        }
    }

    /// Returns `true` when a tick is due.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.interval.as_mut() {
            Some(interval) => interval.poll(now_ms),
            None => false,
        }
    }
}
