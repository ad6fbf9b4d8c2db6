//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. One instance holds one
//! `reqwest::Client` with a cookie jar, so session cookies set by the login
//! and session exchange are replayed on every later call.

use std::error::Error as _;
use std::future::Future;

use netprov_application::ports::{HttpTransport, TransportError, TransportResult};
use netprov_domain::{ClientSettings, HttpMethod, RequestSpec, ResponseSpec};
use reqwest::{Client, Method, Url};
use tracing::{debug, warn};

/// HTTP transport backed by reqwest.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport from client settings.
    ///
    /// Configuration:
    /// - Connect and read timeouts from settings (60s each by default)
    /// - Cookie store enabled
    /// - TLS certificate verification disabled when `accept_invalid_certs` is set
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &ClientSettings) -> TransportResult<Self> {
        if settings.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for all requests");
        }

        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .cookie_store(true)
            .connect_timeout(settings.connect_timeout())
            .read_timeout(settings.read_timeout())
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error) -> TransportError {
        let message = error_chain(error);

        if error.is_timeout() {
            return TransportError::Timeout(message);
        }

        if error.is_connect() {
            if message.to_lowercase().contains("refused") {
                return TransportError::ConnectionRefused {
                    host: error
                        .url()
                        .and_then(Url::host_str)
                        .unwrap_or("unknown")
                        .to_string(),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_body() || error.is_decode() {
            return TransportError::InvalidBody(message);
        }

        if error.is_request() {
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(message)
    }
}

/// Joins an error with all of its sources.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = TransportResult<ResponseSpec>> + Send {
        let method = request.method;
        let url = request.url.clone();
        let body = request.body.clone();
        let headers = request.headers;

        async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| TransportError::InvalidUrl(format!("{e}: {url}")))?;

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url);

            for (name, value) in headers.headers() {
                builder = builder.header(*name, *value);
            }

            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| Self::map_error(&e))?;
            let status = response.status().as_u16();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| TransportError::InvalidBody(format!("failed to read body: {e}")))?
                .to_vec();

            debug!(%method, %url, status, bytes = body_bytes.len(), "HTTP exchange complete");
            Ok(ResponseSpec::new(status, body_bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
    }

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(&ClientSettings::default());
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let transport = ReqwestTransport::with_client(Client::new());
        let result = transport.send(&RequestSpec::get("not a url")).await;
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }
}
