//! Netprov Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the transport, sleeping and time)
//! - The session handshake, provisioning submission and status polling
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

pub use error::{SessionError, SessionResult, StatusReadError};
pub use ports::{Clock, HttpTransport, Sleeper, TransportError, TransportResult};
pub use use_cases::{
    PollOutcome, ProvisionPlan, ProvisionReport, ProvisionTenantNetwork, ProvisioningClient,
    SessionManager, StatusPoller, SubmitOutcome,
};
