//! Session handshake use case.
//!
//! Authentication is a two-step exchange against endpoints derived from the
//! target URL: the credentials are posted to `{api}/user/login`, and whatever
//! object the login returns is posted to `{api}/sessions`. The raw body of
//! the second response is the session. Both calls go through the same
//! transport so cookies set by the login travel with the exchange and with
//! every later call.

use std::sync::Arc;

use netprov_domain::{ApiEndpoint, Credentials, LoginResult, RequestSpec, Session};
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use crate::ports::{HttpTransport, TransportResult};

/// Establishes authenticated sessions against the provisioning API.
pub struct SessionManager<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> SessionManager<T> {
    /// Creates a session manager over the given transport.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Logs in and exchanges the login result for a session.
    ///
    /// A login that gets no response, or whose body is not a JSON object, is
    /// not fatal: the exchange proceeds with an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EndpointDerivation` if `base_url` has no
    /// `/api/` segment (nothing is sent), or `SessionError::Exchange` if the
    /// session exchange gets no response.
    pub async fn establish_session(
        &self,
        base_url: &str,
        credentials: &Credentials,
    ) -> SessionResult<Session> {
        let login_url = ApiEndpoint::Login.derive(base_url)?;
        let login = match self.login(&login_url, credentials).await {
            Ok(login) => login,
            Err(error) => {
                warn!(url = %login_url, %error, "Login request failed, continuing with empty login result");
                LoginResult::empty()
            }
        };

        let session_url = ApiEndpoint::Session.derive(base_url)?;
        let session = self
            .exchange(&session_url, &login)
            .await
            .map_err(SessionError::Exchange)?;

        info!(user = %credentials.user_name, "Session established");
        Ok(session)
    }

    /// Posts the credentials to the login endpoint.
    ///
    /// The response status is not checked; an undecodable body yields an
    /// empty `LoginResult`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if no response was received.
    pub async fn login(
        &self,
        login_url: &str,
        credentials: &Credentials,
    ) -> TransportResult<LoginResult> {
        debug!(url = %login_url, "Sending login request");
        let request = RequestSpec::post_json(login_url, credentials.to_login_body());
        let response = self.transport.send(&request).await?;

        if response.is_failure() {
            warn!(status = %response.status, "Login returned a failure status");
        }

        let login = LoginResult::from_payload(&response.body);
        if login.is_empty() {
            debug!("Login body carried no usable fields");
        }
        Ok(login)
    }

    /// Posts a login result to the session endpoint and keeps the raw body.
    ///
    /// # Errors
    ///
    /// Returns the transport error if no response was received.
    pub async fn exchange(&self, session_url: &str, login: &LoginResult) -> TransportResult<Session> {
        debug!(url = %session_url, "Sending session exchange");
        let request = RequestSpec::post_json(session_url, login.to_body());
        let response = self.transport.send(&request).await?;

        if response.is_failure() {
            warn!(status = %response.status, "Session exchange returned a failure status");
        }

        Ok(Session::new(response.body))
    }
}
