//! Per-request header configuration.

/// Content type sent on body-less provisioning calls.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Which headers a request carries beyond what the transport adds itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Only transport defaults (a JSON body still gets its own content type).
    #[default]
    TransportDefault,
    /// Send `Content-type: application/json` explicitly.
    JsonContentType,
}

impl HeaderPolicy {
    /// Header selection for the authenticated provisioning call.
    ///
    /// A call without a body sends the JSON content type; a call with a body
    /// sends no extra headers.
    #[must_use]
    pub const fn for_provisioning(has_body: bool) -> Self {
        if has_body {
            Self::TransportDefault
        } else {
            Self::JsonContentType
        }
    }

    /// Returns the explicit headers this policy adds.
    #[must_use]
    pub const fn headers(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::TransportDefault => &[],
            Self::JsonContentType => &[("Content-type", JSON_CONTENT_TYPE)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioning_without_body_sends_json_content_type() {
        let policy = HeaderPolicy::for_provisioning(false);
        assert_eq!(policy, HeaderPolicy::JsonContentType);
        assert_eq!(policy.headers(), &[("Content-type", "application/json")]);
    }

    #[test]
    fn test_provisioning_with_body_omits_headers() {
        let policy = HeaderPolicy::for_provisioning(true);
        assert_eq!(policy, HeaderPolicy::TransportDefault);
        assert!(policy.headers().is_empty());
    }
}
