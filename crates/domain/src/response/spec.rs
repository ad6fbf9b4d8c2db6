//! Response specification type

use std::fmt;

use crate::payload::Payload;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true for any status of 300 or above.
    ///
    /// The provisioning API treats redirects the same as errors.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.0 >= 300
    }

    /// Returns the canonical reason phrase for common status codes.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            204 => "No Content",
            301 => "Moved Permanently",
            302 => "Found",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            409 => "Conflict",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// HTTP response as seen by the use cases: a status and an opaque body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body.
    pub body: Payload,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, body: impl Into<Payload>) -> Self {
        Self {
            status: status.into(),
            body: body.into(),
        }
    }

    /// Creates a response whose body is the given JSON value.
    #[must_use]
    pub fn json(status: impl Into<StatusCode>, body: &serde_json::Value) -> Self {
        Self::new(status, Payload::from(body))
    }

    /// Returns true if the status code is 300 or above.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status.is_failure()
    }
}
