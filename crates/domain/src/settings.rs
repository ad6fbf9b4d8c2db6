//! Client Settings Domain Model
//!
//! Transport and polling knobs for one provisioning run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::timer::PollTimer;

/// Settings for the transport and the poll loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSettings {
    /// Connect timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Read timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub read_timeout_secs: u64,

    /// Skip TLS certificate verification for every request.
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,

    /// User-Agent header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Seconds to wait between non-terminal status reads.
    #[serde(default = "default_poll_step_secs")]
    pub poll_step_secs: u64,

    /// Total poll budget in seconds.
    #[serde(default = "default_max_timer_secs")]
    pub max_timer_secs: u64,

    /// Seconds to wait after an accepted submission before the first read.
    #[serde(default = "default_settle_delay_secs")]
    pub settle_delay_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_accept_invalid_certs() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("netprov/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_poll_step_secs() -> u64 {
    60
}

const fn default_max_timer_secs() -> u64 {
    7200
}

const fn default_settle_delay_secs() -> u64 {
    60
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_timeout_secs(),
            read_timeout_secs: default_timeout_secs(),
            accept_invalid_certs: default_accept_invalid_certs(),
            user_agent: default_user_agent(),
            poll_step_secs: default_poll_step_secs(),
            max_timer_secs: default_max_timer_secs(),
            settle_delay_secs: default_settle_delay_secs(),
        }
    }
}

impl ClientSettings {
    /// Checks that every duration the run depends on is usable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSettings`] for a zero timeout or a zero
    /// poll step.
    pub fn validate(&self) -> DomainResult<()> {
        if self.connect_timeout_secs == 0 || self.read_timeout_secs == 0 {
            return Err(DomainError::InvalidSettings(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        if self.poll_step_secs == 0 {
            return Err(DomainError::InvalidSettings(
                "poll_step_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Connect timeout as a `Duration`.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Read timeout as a `Duration`.
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// Settle delay as a `Duration`.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }

    /// A fresh poll timer for these settings.
    #[must_use]
    pub const fn poll_timer(&self) -> PollTimer {
        PollTimer::new(
            Duration::from_secs(self.max_timer_secs),
            Duration::from_secs(self.poll_step_secs),
        )
    }
}
