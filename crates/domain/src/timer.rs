//! Poll budget tracking.

use std::time::Duration;

/// Default poll budget: two hours.
pub const DEFAULT_MAX_TIMER: Duration = Duration::from_secs(7200);

/// Default interval between status reads.
pub const DEFAULT_POLL_STEP: Duration = Duration::from_secs(60);

/// Elapsed/max/step bookkeeping for the status poller.
///
/// `elapsed` starts at zero and only ever grows by exactly `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTimer {
    elapsed: Duration,
    max: Duration,
    step: Duration,
}

impl PollTimer {
    /// Creates a timer with the given budget and step.
    #[must_use]
    pub const fn new(max: Duration, step: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            max,
            step,
        }
    }

    /// Creates a timer with the given budget and the default step.
    #[must_use]
    pub const fn with_max(max: Duration) -> Self {
        Self::new(max, DEFAULT_POLL_STEP)
    }

    /// Returns true while `elapsed < max`.
    #[must_use]
    pub fn has_time_left(&self) -> bool {
        self.elapsed < self.max
    }

    /// Records one step of waiting and returns the new elapsed time.
    pub fn advance(&mut self) -> Duration {
        self.elapsed = self.elapsed.saturating_add(self.step);
        self.elapsed
    }

    /// Time spent waiting so far.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total poll budget.
    #[must_use]
    pub const fn max(&self) -> Duration {
        self.max
    }

    /// Sleep between unsuccessful reads.
    #[must_use]
    pub const fn step(&self) -> Duration {
        self.step
    }
}

impl Default for PollTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TIMER, DEFAULT_POLL_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let timer = PollTimer::default();
        assert_eq!(timer.max(), Duration::from_secs(7200));
        assert_eq!(timer.step(), Duration::from_secs(60));
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_two_steps_exhaust_120() {
        let mut timer = PollTimer::new(Duration::from_secs(120), Duration::from_secs(60));
        assert!(timer.has_time_left());
        assert_eq!(timer.advance(), Duration::from_secs(60));
        assert!(timer.has_time_left());
        assert_eq!(timer.advance(), Duration::from_secs(120));
        assert!(!timer.has_time_left());
    }

    #[test]
    fn test_zero_budget_never_runs() {
        let timer = PollTimer::with_max(Duration::ZERO);
        assert!(!timer.has_time_left());
    }
}
