//! HTTP transport seam.

use async_trait::async_trait;
use elite_config::InaraConfig;
use elite_error::{ConfigError, InaraError, InaraErrorKind, InaraResult};
use elite_models::Request;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, error, instrument};

/// Status and body of an HTTP response, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl RawResponse {
    /// Build a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a serialized request and returns whatever came back.
///
/// Implementations report connection, timeout and body-read failures as
/// [`InaraErrorKind::Transport`]. HTTP error statuses are not failures at
/// this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `request` as JSON to `url`.
    async fn post(&self, url: &str, request: &Request) -> InaraResult<RawResponse>;
}

/// reqwest-backed transport.
///
/// The connection pool lives as long as the transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the configured timeout and identifying headers.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the user agent is not a valid header
    /// value, or an API error if the TLS backend cannot be initialised.
    pub fn new(config: &InaraConfig) -> InaraResult<Self> {
        let user_agent = HeaderValue::from_str(&config.user_agent()).map_err(|e| {
            ConfigError::setting(
                "app_name",
                format!("Invalid user agent {}: {}", config.user_agent(), e),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout_duration())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                error!(error = ?e, "Failed to build HTTP client");
                InaraError::new(InaraErrorKind::Api {
                    status: None,
                    message: format!("Failed to build HTTP client: {}", e),
                })
            })?;

        debug!(timeout_secs = config.timeout, "Created reqwest transport");
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(events = request.events.len()))]
    async fn post(&self, url: &str, request: &Request) -> InaraResult<RawResponse> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Inara");
                InaraError::new(InaraErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, status, "Failed to read Inara response body");
            InaraError::new(InaraErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        debug!(status, bytes = body.len(), "Received Inara response");
        Ok(RawResponse { status, body })
    }
}
