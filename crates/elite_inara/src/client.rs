//! The real Inara client and its dispatch pipeline.

use crate::transport::{HttpTransport, RawResponse, ReqwestTransport};
use elite_cache::{CacheKey, ResponseCache, ResponseCacheConfig};
use elite_config::InaraConfig;
use elite_error::{ConfigError, InaraError, InaraErrorKind, InaraResult, RetryableError};
use elite_models::{ApiReply, Event, Header, Request, Response};
use elite_rate_limit::SlidingWindowLimiter;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, info, instrument, warn};

/// Retry delays: `base * factor^n` for `n` in `0..max_retries`.
///
/// # Examples
///
/// ```
/// use elite_inara::backoff_delays;
/// use std::time::Duration;
///
/// let delays: Vec<_> = backoff_delays(Duration::from_secs(1), 2.0, 3).collect();
/// assert_eq!(
///     delays,
///     [Duration::from_secs(1), Duration::from_secs(2), Duration::from_secs(4)]
/// );
/// ```
pub fn backoff_delays(
    base: Duration,
    factor: f64,
    max_retries: u32,
) -> impl Iterator<Item = Duration> {
    (0..max_retries).map(move |attempt| {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        Duration::try_from_secs_f64(base.as_secs_f64() * factor.powi(exponent))
            .unwrap_or(Duration::MAX)
    })
}

/// Turn a raw HTTP response into a [`Response`] or the error it signals.
///
/// HTTP status is checked first (429, 401, other errors), then the body's
/// shape. A header-only body is always an error: 400 means the key was
/// rejected, anything else is an API error. In the full shape the first
/// event with status 202 or >= 400 fails the request; statuses strictly
/// between 200 and 400 are logged as warnings.
///
/// # Errors
///
/// Returns the classified error. Bodies that are not JSON or match neither
/// shape are API errors.
pub fn classify(raw: RawResponse) -> InaraResult<Response> {
    match raw.status {
        429 => {
            warn!("Inara rate limit exceeded");
            return Err(InaraError::new(InaraErrorKind::RateLimited(
                non_empty(raw.body, "Rate limit exceeded"),
            )));
        }
        401 => {
            return Err(InaraError::new(InaraErrorKind::Authentication {
                status: Some(401),
                message: non_empty(raw.body, "Unauthorized"),
            }));
        }
        status if status >= 400 => {
            return Err(InaraError::new(InaraErrorKind::Api {
                status: Some(status),
                message: non_empty(raw.body, "HTTP error"),
            }));
        }
        _ => {}
    }

    let value: JsonValue = serde_json::from_str(&raw.body).map_err(|e| {
        InaraError::new(InaraErrorKind::Api {
            status: None,
            message: format!("Unexpected response: {}", e),
        })
    })?;

    let reply = ApiReply::from_value(value).map_err(|e| {
        InaraError::new(InaraErrorKind::Api {
            status: None,
            message: format!("Unexpected response shape: {}", e),
        })
    })?;

    match reply {
        ApiReply::Error(body) => {
            let status = body.header.event_status;
            let message = non_empty(body.header.event_status_text, "Unknown error");
            if status == 400 {
                Err(InaraError::new(InaraErrorKind::Authentication {
                    status: Some(status),
                    message,
                }))
            } else {
                Err(InaraError::new(InaraErrorKind::Api {
                    status: Some(status),
                    message,
                }))
            }
        }
        ApiReply::Full(response) => {
            for event in &response.events {
                match event.event_status {
                    202 => {
                        return Err(InaraError::new(InaraErrorKind::Authentication {
                            status: Some(202),
                            message: event.status_text().to_string(),
                        }));
                    }
                    status if status >= 400 => {
                        return Err(InaraError::new(InaraErrorKind::Api {
                            status: Some(status),
                            message: event.status_text().to_string(),
                        }));
                    }
                    status if status > 200 => {
                        warn!(status, text = %event.event_status_text, "Inara event warning");
                    }
                    _ => {}
                }
            }
            Ok(response)
        }
    }
}

fn non_empty(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Parse the first event's payload (or one key of it) into `D`.
///
/// Absent payloads and parse failures both yield `None`; failures are logged.
pub(crate) fn parse_payload<D: DeserializeOwned>(
    response: &Response,
    key: Option<&str>,
) -> Option<D> {
    let data = response.first_data()?;
    let data = match key {
        Some(key) => data.get(key)?,
        None => data,
    };

    match D::deserialize(data) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(
                error = %e,
                target_type = std::any::type_name::<D>(),
                "Failed to parse Inara payload"
            );
            None
        }
    }
}

/// Client for the Inara API.
///
/// Holds the rate limiter, the response cache and the HTTP transport; share
/// it behind an [`Arc`] rather than constructing one per call.
pub struct InaraClient<T = ReqwestTransport> {
    config: Arc<InaraConfig>,
    transport: T,
    limiter: SlidingWindowLimiter,
    cache: ResponseCache,
    commander: Option<String>,
}

impl<T> std::fmt::Debug for InaraClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InaraClient")
            .field("base_url", &self.config.base_url)
            .field("commander", &self.commander)
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl InaraClient<ReqwestTransport> {
    /// Client over reqwest.
    ///
    /// # Errors
    ///
    /// Returns [`InaraErrorKind::Configuration`] if `config` fails
    /// validation, or an error if the HTTP client cannot be built.
    pub fn new(config: Arc<InaraConfig>) -> InaraResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> InaraClient<T> {
    /// Client over a custom transport.
    ///
    /// # Errors
    ///
    /// Returns [`InaraErrorKind::Configuration`] if `config` fails
    /// validation.
    pub fn with_transport(config: Arc<InaraConfig>, transport: T) -> InaraResult<Self> {
        config.validate()?;

        let limiter = SlidingWindowLimiter::new(
            config.rate_limit_requests,
            config.rate_limit_window_duration(),
        )
        .map_err(|e| ConfigError::new(e.to_string()))?;

        let cache = ResponseCache::new(
            ResponseCacheConfig::default()
                .with_enabled(config.cache_enabled)
                .with_ttl_secs(config.cache_ttl),
        );

        info!(base_url = %config.base_url, "Created Inara client");

        Ok(Self {
            commander: config.commander_name.clone(),
            config,
            transport,
            limiter,
            cache,
        })
    }

    /// Use `name` when a call does not name a commander.
    pub fn with_commander(mut self, name: impl Into<String>) -> Self {
        self.commander = Some(name.into());
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &InaraConfig {
        &self.config
    }

    /// Response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Rate limiter.
    pub fn limiter(&self) -> &SlidingWindowLimiter {
        &self.limiter
    }

    /// Send `events` in one request and return the classified response.
    ///
    /// `commander` overrides the client's default commander. Answers are
    /// served from the cache while fresh.
    ///
    /// # Errors
    ///
    /// - authentication failure (HTTP 401, event status 202, error-shape 400)
    /// - rate limiting by the remote (HTTP 429)
    /// - any other remote error, an unexpected body, or transport failure
    ///   after all retries
    #[instrument(skip(self, events), fields(events = events.len()))]
    pub async fn send(&self, events: Vec<Event>, commander: Option<&str>) -> InaraResult<Response> {
        if events.is_empty() {
            return Err(InaraError::new(InaraErrorKind::Api {
                status: None,
                message: "Request must contain at least one event".to_string(),
            }));
        }

        let commander = commander.or(self.commander.as_deref());

        let key = CacheKey::new(commander, &events);
        if let Some(cached) = self.cache.lookup(&key) {
            match serde_json::from_value::<Response>(cached) {
                Ok(response) => {
                    debug!("Serving Inara response from cache");
                    return Ok(response);
                }
                Err(e) => warn!(error = %e, "Discarding unreadable cache entry"),
            }
        }

        let request = Request::new(self.header(commander)?, events);
        let response = self.dispatch(&request).await?;

        match serde_json::to_value(&response) {
            Ok(value) => self.cache.store(key, value),
            Err(e) => warn!(error = %e, "Failed to cache Inara response"),
        }
        Ok(response)
    }

    /// Drop all cached responses.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn header(&self, commander: Option<&str>) -> InaraResult<Header> {
        let mut builder = Header::builder();
        builder
            .app_name(self.config.app_name.as_str())
            .app_version(self.config.app_version.as_str())
            .api_key(self.config.api_key.as_str());
        if let Some(name) = commander {
            builder.commander_name(name);
        }

        builder.build().map_err(|e| {
            InaraError::new(InaraErrorKind::Authentication {
                status: None,
                message: e.to_string(),
            })
        })
    }

    /// Admit, POST and classify, retrying transport failures.
    async fn dispatch(&self, request: &Request) -> InaraResult<Response> {
        let max_retries = self.config.max_retries;
        let strategy = backoff_delays(
            self.config.retry_delay_duration(),
            self.config.backoff_factor,
            max_retries,
        );

        let result = Retry::spawn(strategy, || async move {
            let waited = self.limiter.admit().await;
            if !waited.is_zero() {
                info!(waited_secs = waited.as_secs_f64(), "Waited for rate limit");
            }

            let outcome = self
                .transport
                .post(&self.config.base_url, request)
                .await
                .and_then(classify);

            match outcome {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Inara request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await;

        result.map_err(|e| match e.kind {
            InaraErrorKind::Transport(message) => InaraError::new(InaraErrorKind::Api {
                status: None,
                message: format!("Request failed after {} retries: {}", max_retries, message),
            }),
            _ => e,
        })
    }
}
