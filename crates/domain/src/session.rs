//! Authenticated session types.

use crate::payload::{JsonObject, Payload};

/// The decoded login response, used only as the session-exchange body.
///
/// An undecodable login body yields an empty mapping rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginResult {
    fields: JsonObject,
}

impl LoginResult {
    /// Builds a login result from a login response body.
    #[must_use]
    pub fn from_payload(payload: &Payload) -> Self {
        Self {
            fields: payload.object_or_empty(),
        }
    }

    /// Returns an empty login result.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the login response carried no usable fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the session-exchange body.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::Value::Object(self.fields.clone())
    }
}

/// An established session: the raw body of the session-exchange response.
///
/// The client never inspects it. Authentication for later calls travels in
/// the transport's cookie jar; the session is kept for the duration of one
/// provisioning sequence and is never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    body: Payload,
}

impl Session {
    /// Wraps a session-exchange response body.
    #[must_use]
    pub const fn new(body: Payload) -> Self {
        Self { body }
    }

    /// Returns the raw session body.
    #[must_use]
    pub const fn body(&self) -> &Payload {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_result_from_json() {
        let login = LoginResult::from_payload(&Payload::from(r#"{"token": "t-1"}"#));
        assert!(!login.is_empty());
        assert_eq!(login.to_body(), serde_json::json!({"token": "t-1"}));
    }

    #[test]
    fn test_login_result_from_garbage_is_empty() {
        let login = LoginResult::from_payload(&Payload::from("Login OK"));
        assert!(login.is_empty());
        assert_eq!(login.to_body(), serde_json::json!({}));
    }

    #[test]
    fn test_session_keeps_raw_body() {
        let session = Session::new(Payload::from("opaque-session"));
        assert_eq!(session.body().as_bytes(), b"opaque-session");
    }
}
