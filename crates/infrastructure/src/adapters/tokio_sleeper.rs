//! Sleeper adapter backed by the tokio timer.

use std::future::Future;
use std::time::Duration;

use netprov_application::ports::Sleeper;

/// Suspends the current task with `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl TokioSleeper {
    /// Creates a new tokio sleeper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
