//! Provisioning submission and status reads.

use std::sync::Arc;

use netprov_domain::{Credentials, RequestSpec, ResponseSpec, Session, StatusCode, provision_url};
use tracing::{debug, error, info};

use crate::error::{SessionError, SessionResult, StatusReadError};
use crate::ports::{HttpTransport, TransportError};
use crate::use_cases::SessionManager;

/// Result of a provisioning submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service accepted the request.
    Accepted {
        /// Status of the provisioning response.
        status: StatusCode,
    },
    /// No session could be established, so nothing was submitted.
    SessionUnavailable(SessionError),
    /// The provisioning request received no response.
    TransportFailure(TransportError),
    /// The service answered with a status of 300 or above.
    Rejected {
        /// Status of the provisioning response.
        status: StatusCode,
    },
}

impl SubmitOutcome {
    /// Returns true only if the service accepted the request.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns a human-readable summary.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Accepted { status } => format!("Provision request accepted ({status})"),
            Self::SessionUnavailable(e) => {
                format!("Provision failure, could not establish a session: {e}")
            }
            Self::TransportFailure(e) => {
                format!("Provision failure, please contact support: {e}")
            }
            Self::Rejected { status } => {
                format!("Provision failure, status_code: {status}, please contact support")
            }
        }
    }
}

/// Submits provisioning requests and reads tenant network status.
///
/// Owns the session for one provisioning sequence. The session is set by
/// [`authenticate`](Self::authenticate) and never refreshed.
pub struct ProvisioningClient<T: HttpTransport> {
    transport: Arc<T>,
    sessions: SessionManager<T>,
    session: Option<Session>,
}

impl<T: HttpTransport> ProvisioningClient<T> {
    /// Creates a client over the given transport.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            sessions: SessionManager::new(Arc::clone(&transport)),
            transport,
            session: None,
        }
    }

    /// The established session, if any.
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Establishes a session for the API that hosts `tenant_network_url`.
    ///
    /// # Errors
    ///
    /// Returns the `SessionError` from the handshake.
    pub async fn authenticate(
        &mut self,
        tenant_network_url: &str,
        credentials: &Credentials,
    ) -> SessionResult<&Session> {
        let session = self
            .sessions
            .establish_session(tenant_network_url, credentials)
            .await?;
        Ok(&*self.session.insert(session))
    }

    /// Authenticates, then posts to `{tenant_network_url}/provision`.
    ///
    /// The provisioning call has no body and is sent once.
    pub async fn submit_provisioning(
        &mut self,
        tenant_network_url: &str,
        credentials: &Credentials,
    ) -> SubmitOutcome {
        if let Err(e) = self.authenticate(tenant_network_url, credentials).await {
            let outcome = SubmitOutcome::SessionUnavailable(e);
            error!("{}", outcome.message());
            return outcome;
        }

        let request = RequestSpec::provisioning_post(provision_url(tenant_network_url), None);
        debug!(url = %request.url, "Submitting provision request");

        let outcome = match self.transport.send(&request).await {
            Err(e) => SubmitOutcome::TransportFailure(e),
            Ok(response) if response.is_failure() => SubmitOutcome::Rejected {
                status: response.status,
            },
            Ok(response) => SubmitOutcome::Accepted {
                status: response.status,
            },
        };

        if outcome.is_accepted() {
            info!("{}", outcome.message());
        } else {
            error!("{}", outcome.message());
        }
        outcome
    }

    /// Reads the tenant network resource with a plain GET.
    ///
    /// # Errors
    ///
    /// Returns `StatusReadError::NoSession` without sending anything if
    /// [`authenticate`](Self::authenticate) has not succeeded, or the
    /// transport error if no response was received.
    pub async fn read_status(
        &self,
        tenant_network_url: &str,
    ) -> Result<ResponseSpec, StatusReadError> {
        if self.session.is_none() {
            return Err(StatusReadError::NoSession);
        }
        let response = self
            .transport
            .send(&RequestSpec::get(tenant_network_url))
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TransportResult;
    use crate::testing::{ScriptedTransport, ok, refused};
    use netprov_domain::{HeaderPolicy, HttpMethod};
    use pretty_assertions::assert_eq;

    const TENANT_URL: &str = "https://host/api/tenantnetworks/122";

    fn creds() -> Credentials {
        Credentials::new("admin", "s3cret")
    }

    fn handshake() -> Vec<TransportResult<ResponseSpec>> {
        vec![ok(200, r#"{"token": "t-1"}"#), ok(200, "session-blob")]
    }

    fn client_with(
        provision: TransportResult<ResponseSpec>,
    ) -> (Arc<ScriptedTransport>, ProvisioningClient<ScriptedTransport>) {
        let mut script = handshake();
        script.push(provision);
        let transport = Arc::new(ScriptedTransport::new(script));
        let client = ProvisioningClient::new(Arc::clone(&transport));
        (transport, client)
    }

    #[tokio::test]
    async fn test_submit_accepted_on_200() {
        let (transport, mut client) = client_with(ok(200, "{}"));

        let outcome = client.submit_provisioning(TENANT_URL, &creds()).await;

        assert!(outcome.is_accepted());
        assert!(client.session().is_some());
        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].method, HttpMethod::Post);
        assert_eq!(requests[2].url, "https://host/api/tenantnetworks/122/provision");
        assert_eq!(requests[2].body, None);
        assert_eq!(requests[2].headers, HeaderPolicy::JsonContentType);
    }

    #[tokio::test]
    async fn test_submit_rejected_on_404() {
        let (_, mut client) = client_with(ok(404, "not found"));

        let outcome = client.submit_provisioning(TENANT_URL, &creds()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                status: StatusCode::new(404)
            }
        );
        assert!(!outcome.is_accepted());
    }

    #[tokio::test]
    async fn test_submit_rejected_on_300() {
        let (_, mut client) = client_with(ok(300, ""));

        let outcome = client.submit_provisioning(TENANT_URL, &creds()).await;

        assert!(!outcome.is_accepted());
    }

    #[tokio::test]
    async fn test_submit_transport_failure() {
        let (_, mut client) = client_with(Err(refused()));

        let outcome = client.submit_provisioning(TENANT_URL, &creds()).await;

        assert_eq!(outcome, SubmitOutcome::TransportFailure(refused()));
        assert!(outcome.message().contains("contact support"));
    }

    #[tokio::test]
    async fn test_no_submission_without_session() {
        let transport = Arc::new(ScriptedTransport::new([ok(200, "{}")]));
        let mut client = ProvisioningClient::new(Arc::clone(&transport));

        let outcome = client.submit_provisioning(TENANT_URL, &creds()).await;

        assert!(matches!(outcome, SubmitOutcome::SessionUnavailable(_)));
        assert!(client.session().is_none());
        assert_eq!(
            transport.urls(),
            vec![
                "https://host/api/user/login".to_string(),
                "https://host/api/sessions".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_read_status_is_plain_get() {
        let mut script = handshake();
        script.push(ok(200, r#"{"state": "SUCCESS"}"#));
        let transport = Arc::new(ScriptedTransport::new(script));
        let mut client = ProvisioningClient::new(Arc::clone(&transport));
        assert!(client.authenticate(TENANT_URL, &creds()).await.is_ok());

        let response = client.read_status(TENANT_URL).await;

        assert!(response.is_ok());
        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].method, HttpMethod::Get);
        assert_eq!(requests[2].url, TENANT_URL);
        assert_eq!(requests[2].headers, HeaderPolicy::TransportDefault);
    }

    #[tokio::test]
    async fn test_read_status_requires_session() {
        let transport = Arc::new(ScriptedTransport::new([ok(200, r#"{"state": "SUCCESS"}"#)]));
        let client = ProvisioningClient::new(Arc::clone(&transport));

        let response = client.read_status(TENANT_URL).await;

        assert_eq!(response, Err(StatusReadError::NoSession));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_read_status_transport_failure() {
        let mut script = handshake();
        script.push(Err(refused()));
        let transport = Arc::new(ScriptedTransport::new(script));
        let mut client = ProvisioningClient::new(Arc::clone(&transport));
        assert!(client.authenticate(TENANT_URL, &creds()).await.is_ok());

        let response = client.read_status(TENANT_URL).await;

        assert_eq!(response, Err(StatusReadError::Transport(refused())));
    }
}
