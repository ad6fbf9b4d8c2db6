//! Request specification type

use serde_json::Value;

use super::{HeaderPolicy, HttpMethod};

/// Complete specification for one call to the provisioning API.
///
/// Headers are carried as an explicit per-request [`HeaderPolicy`]; there is
/// no shared header state between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL
    pub url: String,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Extra headers to send
    pub headers: HeaderPolicy,
}

impl RequestSpec {
    /// Creates a GET request with transport default headers.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
            headers: HeaderPolicy::TransportDefault,
        }
    }

    /// Creates a POST request carrying a JSON body.
    #[must_use]
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body),
            headers: HeaderPolicy::TransportDefault,
        }
    }

    /// Creates a POST request with an optional body, selecting headers
    /// with [`HeaderPolicy::for_provisioning`].
    #[must_use]
    pub fn provisioning_post(url: impl Into<String>, body: Option<Value>) -> Self {
        let headers = HeaderPolicy::for_provisioning(body.is_some());
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body,
            headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request() {
        let req = RequestSpec::get("https://host/api/tenantnetworks/1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.body, None);
        assert_eq!(req.headers, HeaderPolicy::TransportDefault);
    }

    #[test]
    fn test_provisioning_post_without_body() {
        let req = RequestSpec::provisioning_post("https://host/api/tenantnetworks/1/provision", None);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.headers, HeaderPolicy::JsonContentType);
    }

    #[test]
    fn test_provisioning_post_with_body() {
        let req = RequestSpec::provisioning_post(
            "https://host/api/tenantnetworks/1/provision",
            Some(serde_json::json!({"dryRun": true})),
        );
        assert_eq!(req.headers, HeaderPolicy::TransportDefault);
    }
}
