//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The URL has no `/api/` segment, so no authentication endpoint can be derived from it.
    #[error("cannot derive API endpoint: no /api/ segment in {url}")]
    EndpointDerivation {
        /// The URL that was inspected.
        url: String,
    },

    /// A settings value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
