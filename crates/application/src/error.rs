//! Application error types

use netprov_domain::DomainError;
use thiserror::Error;

use crate::ports::TransportError;

/// Failure to establish an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The authentication endpoints could not be derived from the URL.
    #[error(transparent)]
    EndpointDerivation(#[from] DomainError),

    /// The session exchange received no response.
    #[error("session exchange failed: {0}")]
    Exchange(#[source] TransportError),
}

/// Result type alias for session establishment.
pub type SessionResult<T> = Result<T, SessionError>;

/// Failure to read the tenant network status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusReadError {
    /// No session was established before the read.
    #[error("no session established")]
    NoSession,

    /// The status read received no response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
