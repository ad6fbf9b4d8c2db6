//! Opaque response payloads with a lazily decoded JSON view.

use std::fmt;
use std::sync::OnceLock;

use serde_json::{Map, Value};

/// A JSON object decoded from a payload.
pub type JsonObject = Map<String, Value>;

/// Raw response bytes plus a lazily parsed structured view.
///
/// Decoding happens at most once, on first access. A body that is not a JSON
/// object decodes to `None`; callers treat that as an ordinary branch.
#[derive(Default)]
pub struct Payload {
    raw: Vec<u8>,
    parsed: OnceLock<Option<JsonObject>>,
}

impl Payload {
    /// Wraps raw bytes without decoding them.
    #[must_use]
    pub const fn new(raw: Vec<u8>) -> Self {
        Self {
            raw,
            parsed: OnceLock::new(),
        }
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Consumes the payload and returns the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }

    /// Returns the body as a lossy UTF-8 string.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }

    /// Returns true if the payload has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the decoded object, or `None` if the body is not a JSON object.
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonObject> {
        self.parsed
            .get_or_init(|| match serde_json::from_slice::<Value>(&self.raw) {
                Ok(Value::Object(map)) => Some(map),
                _ => None,
            })
            .as_ref()
    }

    /// Returns the decoded object, or an empty one if decoding fails.
    #[must_use]
    pub fn object_or_empty(&self) -> JsonObject {
        self.as_object().cloned().unwrap_or_default()
    }

    /// Returns a string field of the decoded object.
    ///
    /// `None` covers both an undecodable body and a missing or non-string field.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.as_object()?.get(key)?.as_str()
    }
}

impl Clone for Payload {
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Payload {}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("len", &self.raw.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(raw: Vec<u8>) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Payload {
    fn from(raw: &str) -> Self {
        Self::new(raw.as_bytes().to_vec())
    }
}

impl From<&Value> for Payload {
    fn from(value: &Value) -> Self {
        Self::new(value.to_string().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_body() {
        let payload = Payload::from(r#"{"state": "SUCCESS", "id": 7}"#);
        let object = payload.as_object();
        assert!(object.is_some());
        assert_eq!(payload.str_field("state"), Some("SUCCESS"));
        assert_eq!(payload.str_field("id"), None);
    }

    #[test]
    fn test_malformed_body_decodes_to_none() {
        let payload = Payload::from("<html>502 Bad Gateway</html>");
        assert!(payload.as_object().is_none());
        assert!(payload.object_or_empty().is_empty());
        assert_eq!(payload.str_field("state"), None);
    }

    #[test]
    fn test_non_object_json_decodes_to_none() {
        assert!(Payload::from("[1, 2, 3]").as_object().is_none());
        assert!(Payload::from("\"text\"").as_object().is_none());
    }

    #[test]
    fn test_empty_body() {
        let payload = Payload::default();
        assert!(payload.is_empty());
        assert!(payload.as_object().is_none());
    }

    #[test]
    fn test_raw_bytes_preserved() {
        let payload = Payload::from("not json at all");
        assert_eq!(payload.to_string_lossy(), "not json at all");
        assert_eq!(payload.into_bytes(), b"not json at all".to_vec());
    }

    #[test]
    fn test_debug_hides_content() {
        let payload = Payload::from(r#"{"token": "abc"}"#);
        assert!(!format!("{payload:?}").contains("abc"));
    }
}
