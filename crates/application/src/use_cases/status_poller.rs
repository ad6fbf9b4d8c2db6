//! Bounded status polling.
//!
//! The poller reads the tenant network resource until the service reports a
//! terminal state or the poll budget runs out:
//!
//! | read result                         | effect                              |
//! |-------------------------------------|-------------------------------------|
//! | no session, or transport failure    | `ReadError`, stop                   |
//! | `SUCCESS`                           | `Success`, stop                     |
//! | `FAILED`                            | `Failed`, stop                      |
//! | `PARTIAL_SUCCESS`                   | `PartialSuccess`, stop              |
//! | any other or absent `state`         | sleep one step, advance the timer   |
//! | body is not a JSON object           | read again at once, timer unchanged |
//!
//! A status code of 300 or above is logged and otherwise ignored; the body is
//! still interpreted.

use std::sync::Arc;
use std::time::Duration;

use netprov_domain::{PollTimer, PollerState, ProvisionState};
use tracing::{debug, error, info, warn};

use crate::error::StatusReadError;
use crate::ports::{HttpTransport, Sleeper};
use crate::use_cases::ProvisioningClient;

/// Terminal result of a polling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The service reported `SUCCESS`.
    Success,
    /// The service reported `FAILED`.
    Failed,
    /// The service reported `PARTIAL_SUCCESS`.
    PartialSuccess,
    /// No terminal state was seen within the poll budget.
    TimedOut {
        /// Time spent sleeping between reads.
        elapsed: Duration,
    },
    /// A status read could not be made or received no response.
    ReadError(StatusReadError),
}

impl PollOutcome {
    /// The poller state this outcome ends in.
    #[must_use]
    pub const fn state(&self) -> PollerState {
        match self {
            Self::Success => PollerState::Success,
            Self::Failed => PollerState::Failed,
            Self::PartialSuccess => PollerState::PartialSuccess,
            Self::TimedOut { .. } => PollerState::TimedOut,
            Self::ReadError(_) => PollerState::ReadError,
        }
    }

    /// Returns true only for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns a human-readable summary.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Success => "Tenant provision success".to_string(),
            Self::Failed => "Tenant provision failure".to_string(),
            Self::PartialSuccess => {
                "Tenant provision partial success - a connector or service provision is likely to have failed"
                    .to_string()
            }
            Self::TimedOut { elapsed } => format!(
                "Provisioning did not complete even after {} seconds, check portal for progress",
                elapsed.as_secs()
            ),
            Self::ReadError(e) => format!(
                "Error reading tenant network, check your credentials or contact support: {e}"
            ),
        }
    }

    fn reported(state: PollerState) -> Option<Self> {
        match state {
            PollerState::Success => Some(Self::Success),
            PollerState::Failed => Some(Self::Failed),
            PollerState::PartialSuccess => Some(Self::PartialSuccess),
            PollerState::Running | PollerState::TimedOut | PollerState::ReadError => None,
        }
    }
}

/// Drives the poll loop over a provisioning client's status reads.
pub struct StatusPoller<'c, T: HttpTransport, S: Sleeper> {
    client: &'c ProvisioningClient<T>,
    sleeper: Arc<S>,
}

impl<'c, T: HttpTransport, S: Sleeper> StatusPoller<'c, T, S> {
    /// Creates a poller that reads through `client` and waits through `sleeper`.
    pub const fn new(client: &'c ProvisioningClient<T>, sleeper: Arc<S>) -> Self {
        Self { client, sleeper }
    }

    /// Polls `tenant_network_url` until a terminal state or until `timer`
    /// is exhausted.
    pub async fn poll_until_terminal(
        &self,
        tenant_network_url: &str,
        mut timer: PollTimer,
    ) -> PollOutcome {
        debug!(
            max_secs = timer.max().as_secs(),
            step_secs = timer.step().as_secs(),
            "Polling provisioning status"
        );

        while timer.has_time_left() {
            let response = match self.client.read_status(tenant_network_url).await {
                Ok(response) => response,
                Err(e) => return Self::finish(PollOutcome::ReadError(e)),
            };

            if response.is_failure() {
                warn!(
                    status = %response.status,
                    "Error reading tenant network, check your credentials or contact support"
                );
            }

            // An undecodable body repeats the read without waiting.
            let Some(reported) = ProvisionState::from_status_body(&response.body) else {
                warn!("Error decoding tenant network data, contact support");
                continue;
            };

            if let Some(outcome) = PollOutcome::reported(PollerState::from(reported)) {
                return Self::finish(outcome);
            }

            self.sleeper.sleep(timer.step()).await;
            let elapsed = timer.advance();
            info!(
                elapsed_secs = elapsed.as_secs(),
                "Provisioning in progress"
            );
        }

        Self::finish(PollOutcome::TimedOut {
            elapsed: timer.elapsed(),
        })
    }

    fn finish(outcome: PollOutcome) -> PollOutcome {
        let state = outcome.state();
        if state.is_success() {
            info!("{}", outcome.message());
        } else if matches!(state, PollerState::TimedOut | PollerState::PartialSuccess) {
            warn!("{}", outcome.message());
        } else {
            error!("{}", outcome.message());
        }
        outcome
    }
}
