//! Authentication endpoint derivation.
//!
//! The login and session endpoints are never configured directly. They are
//! computed from any URL under the service's API root by keeping everything
//! up to and including the last `/api/` segment and appending a fixed suffix.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DomainError, DomainResult};

static API_ROOT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^(.*/api/)").ok());

/// Path appended to the API root for the login call.
pub const LOGIN_SUFFIX: &str = "user/login";

/// Path appended to the API root for the session exchange.
pub const SESSION_SUFFIX: &str = "sessions";

/// Path appended to a tenant network URL to request provisioning.
pub const PROVISION_SUFFIX: &str = "/provision";

/// An endpoint derived from a URL under the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// `{root}user/login`
    Login,
    /// `{root}sessions`
    Session,
}

impl ApiEndpoint {
    /// Returns the path suffix for this endpoint.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Login => LOGIN_SUFFIX,
            Self::Session => SESSION_SUFFIX,
        }
    }

    /// Derives this endpoint's URL from `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EndpointDerivation`] if `base_url` has no
    /// `/api/` segment.
    pub fn derive(self, base_url: &str) -> DomainResult<String> {
        let root = api_root(base_url).ok_or_else(|| DomainError::EndpointDerivation {
            url: base_url.to_string(),
        })?;
        Ok(format!("{root}{}", self.suffix()))
    }
}

/// Returns everything in `url` up to and including the last `/api/`.
#[must_use]
pub fn api_root(url: &str) -> Option<&str> {
    API_ROOT
        .as_ref()?
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the provisioning URL for a tenant network resource.
#[must_use]
pub fn provision_url(tenant_network_url: &str) -> String {
    format!("{tenant_network_url}{PROVISION_SUFFIX}")
}
