//! Provision Tenant Network Use Case
//!
//! One linear run: submit, wait for the service to record the transition,
//! then poll until a terminal state.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use netprov_domain::{ClientSettings, Credentials, PollTimer, generate_run_id};
use tracing::{Instrument, info, info_span};

use crate::error::{SessionError, SessionResult};
use crate::ports::{Clock, HttpTransport, Sleeper};
use crate::use_cases::{PollOutcome, ProvisioningClient, StatusPoller, SubmitOutcome};

/// Timing for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionPlan {
    /// Poll budget and step.
    pub timer: PollTimer,
    /// Wait between an accepted submission and the first status read.
    pub settle_delay: Duration,
}

impl ProvisionPlan {
    /// Builds a plan from client settings.
    #[must_use]
    pub const fn from_settings(settings: &ClientSettings) -> Self {
        Self {
            timer: settings.poll_timer(),
            settle_delay: settings.settle_delay(),
        }
    }
}

impl Default for ProvisionPlan {
    fn default() -> Self {
        Self::from_settings(&ClientSettings::default())
    }
}

/// What happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Identifier attached to every log line of the run.
    pub run_id: String,
    /// The tenant network that was provisioned.
    pub tenant_network_url: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
    /// Result of the submission.
    pub submission: SubmitOutcome,
    /// Result of polling; `None` if the submission was not accepted.
    pub poll: Option<PollOutcome>,
}

impl ProvisionReport {
    /// True only for an accepted submission followed by a successful poll.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.submission.is_accepted() && self.poll.as_ref().is_some_and(PollOutcome::is_success)
    }

    /// Wall-clock duration of the run.
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Use case for a full authenticate, submit and poll run.
pub struct ProvisionTenantNetwork<T: HttpTransport, S: Sleeper, C: Clock> {
    transport: Arc<T>,
    sleeper: Arc<S>,
    clock: Arc<C>,
}

impl<T: HttpTransport, S: Sleeper, C: Clock> ProvisionTenantNetwork<T, S, C> {
    /// Creates the use case from its ports.
    pub const fn new(transport: Arc<T>, sleeper: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            transport,
            sleeper,
            clock,
        }
    }

    /// Runs the full sequence for `tenant_network_url`.
    pub async fn run(
        &self,
        tenant_network_url: &str,
        credentials: &Credentials,
        plan: ProvisionPlan,
    ) -> ProvisionReport {
        let run_id = generate_run_id();
        let span = info_span!("provision", run_id = %run_id, url = %tenant_network_url);

        async {
            let started_at = self.clock.now();
            let mut client = ProvisioningClient::new(Arc::clone(&self.transport));

            let submission = client
                .submit_provisioning(tenant_network_url, credentials)
                .await;

            let poll = if submission.is_accepted() {
                if !plan.settle_delay.is_zero() {
                    info!(
                        settle_secs = plan.settle_delay.as_secs(),
                        "Waiting for the provision transition"
                    );
                    self.sleeper.sleep(plan.settle_delay).await;
                }
                Some(
                    StatusPoller::new(&client, Arc::clone(&self.sleeper))
                        .poll_until_terminal(tenant_network_url, plan.timer)
                        .await,
                )
            } else {
                None
            };

            ProvisionReport {
                run_id: run_id.clone(),
                tenant_network_url: tenant_network_url.to_string(),
                started_at,
                finished_at: self.clock.now(),
                submission,
                poll,
            }
        }
        .instrument(span)
        .await
    }

    /// Authenticates and polls without submitting.
    ///
    /// # Errors
    ///
    /// Returns the `SessionError` if no session could be established.
    pub async fn watch(
        &self,
        tenant_network_url: &str,
        credentials: &Credentials,
        timer: PollTimer,
    ) -> SessionResult<PollOutcome> {
        let span = info_span!("watch", url = %tenant_network_url);

        async {
            let mut client = ProvisioningClient::new(Arc::clone(&self.transport));
            client.authenticate(tenant_network_url, credentials).await?;
            let outcome = StatusPoller::new(&client, Arc::clone(&self.sleeper))
                .poll_until_terminal(tenant_network_url, timer)
                .await;
            Ok::<_, SessionError>(outcome)
        }
        .instrument(span)
        .await
    }
}
