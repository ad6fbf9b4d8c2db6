//! Sleeper port for the waits between status reads.

use std::future::Future;
use std::time::Duration;

/// Port for suspending the current task.
///
/// The poll loop and the post-submission settle delay both wait through
/// this port.
pub trait Sleeper: Send + Sync {
    /// Suspends for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}
