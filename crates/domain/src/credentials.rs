//! Login credentials.

use std::fmt;

/// Username and password forwarded verbatim as the login body.
///
/// The client does not interpret either value. `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name, sent as `userName`.
    pub user_name: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates a new credentials pair.
    #[must_use]
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    /// Returns the login body for these credentials.
    #[must_use]
    pub fn to_login_body(&self) -> serde_json::Value {
        serde_json::json!({
            "userName": self.user_name,
            "password": self.password,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}
