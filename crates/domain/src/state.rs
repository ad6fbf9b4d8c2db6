//! Provisioning state types.
//!
//! `ProvisionState` is what the service reports for a tenant network.
//! `PollerState` is the state machine the status poller walks through while
//! watching it.

use std::fmt;

use crate::payload::Payload;

/// Name of the status field in a tenant network body.
pub const STATE_FIELD: &str = "state";

/// Provisioning state reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProvisionState {
    /// Provisioning finished successfully.
    Success,
    /// Provisioning failed.
    Failed,
    /// Provisioning finished but some connector or service did not.
    PartialSuccess,
    /// Anything else, including an absent state.
    #[default]
    InProgress,
}

impl ProvisionState {
    /// Parses a state string; unknown or absent values are `InProgress`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("SUCCESS") => Self::Success,
            Some("FAILED") => Self::Failed,
            Some("PARTIAL_SUCCESS") => Self::PartialSuccess,
            _ => Self::InProgress,
        }
    }

    /// Reads the state from a status body.
    ///
    /// Returns `None` if the body is not a JSON object. A decodable body
    /// without a string `state` field is `InProgress`.
    #[must_use]
    pub fn from_status_body(body: &Payload) -> Option<Self> {
        let object = body.as_object()?;
        Some(Self::parse(
            object.get(STATE_FIELD).and_then(serde_json::Value::as_str),
        ))
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::PartialSuccess => "PARTIAL_SUCCESS",
            Self::InProgress => "IN_PROGRESS",
        }
    }
}

impl fmt::Display for ProvisionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// States of the status poller.
///
/// `Running` is the only non-terminal state. `Success` is the only terminal
/// state that counts as a successful provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PollerState {
    /// Still waiting for a terminal provisioning state.
    #[default]
    Running,
    /// The service reported `SUCCESS`.
    Success,
    /// The service reported `FAILED`.
    Failed,
    /// The service reported `PARTIAL_SUCCESS`.
    PartialSuccess,
    /// The poll budget ran out.
    TimedOut,
    /// A status read failed at the transport level.
    ReadError,
}

impl PollerState {
    /// Returns true only for `Success`.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<ProvisionState> for PollerState {
    fn from(state: ProvisionState) -> Self {
        match state {
            ProvisionState::Success => Self::Success,
            ProvisionState::Failed => Self::Failed,
            ProvisionState::PartialSuccess => Self::PartialSuccess,
            ProvisionState::InProgress => Self::Running,
        }
    }
}
