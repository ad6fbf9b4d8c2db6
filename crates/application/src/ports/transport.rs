//! HTTP transport port

use std::future::Future;

use netprov_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Connection-level failure of a single call.
///
/// An HTTP response with any status code is not a transport error; callers
/// inspect the status themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The connect or read timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
    },

    /// The connection could not be established or was dropped.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request body could not be encoded or the response body read.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Result type for transport calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Port for issuing HTTP requests.
///
/// Implementations keep session state (cookies) between calls on the same
/// instance, so a login performed through one call authenticates the calls
/// that follow it.
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if no HTTP response was received.
    fn send(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = TransportResult<ResponseSpec>> + Send;
}
