//! Inara API error types and retry classification.

use crate::ConfigError;

/// Inara-specific error conditions.
///
/// The remote API reports failures on two layers: HTTP status codes on the
/// transport, and status codes embedded in an otherwise successful `200`
/// body. Both layers collapse into these kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InaraErrorKind {
    /// The remote signalled HTTP 429
    #[display("Rate limit exceeded: {}", _0)]
    RateLimited(String),
    /// Credential rejected (HTTP 401, event status 202, or simplified-shape 400)
    #[display("Authentication failed: {}", message)]
    Authentication {
        /// Status code reported by the remote, when one was available
        status: Option<u16>,
        /// Status text or response body
        message: String,
    },
    /// Any other remote failure, or a transport failure after retries
    #[display("API error: {}", message)]
    Api {
        /// Status code reported by the remote, when one was available
        status: Option<u16>,
        /// Status text or response body
        message: String,
    },
    /// Connection, timeout or body-read failure before a response was classified
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The client was handed settings that fail validation
    #[display("Invalid configuration: {}", _0.message)]
    Configuration(ConfigError),
}

impl InaraErrorKind {
    /// Status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            InaraErrorKind::RateLimited(_) => Some(429),
            InaraErrorKind::Authentication { status, .. } | InaraErrorKind::Api { status, .. } => {
                *status
            }
            InaraErrorKind::Transport(_) | InaraErrorKind::Configuration(_) => None,
        }
    }

    /// Check if this error type should be retried.
    ///
    /// Only transport failures are retried locally. Everything the remote
    /// actually answered propagates immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, InaraErrorKind::Transport(_))
    }
}

/// Inara error with source location tracking.
///
/// # Examples
///
/// ```
/// use elite_error::{InaraError, InaraErrorKind};
///
/// let err = InaraError::new(InaraErrorKind::Authentication {
///     status: Some(202),
///     message: "Invalid API key".to_string(),
/// });
/// assert_eq!(err.kind.status(), Some(202));
/// assert!(format!("{}", err).contains("Invalid API key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Inara Error: {} at line {} in {}", kind, line, file)]
pub struct InaraError {
    /// The kind of error that occurred
    pub kind: InaraErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InaraError {
    /// Create a new InaraError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InaraErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InaraErrorKind {
        &self.kind
    }
}

impl From<ConfigError> for InaraError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::new(InaraErrorKind::Configuration(err))
    }
}

/// Result type for Inara client operations.
pub type InaraResult<T> = Result<T, InaraError>;

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use elite_error::{InaraError, InaraErrorKind, RetryableError};
///
/// let timeout = InaraError::new(InaraErrorKind::Transport("timed out".to_string()));
/// assert!(timeout.is_retryable());
///
/// let rejected = InaraError::new(InaraErrorKind::RateLimited("slow down".to_string()));
/// assert!(!rejected.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for InaraError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
