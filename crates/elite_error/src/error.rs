//! Top-level error wrapper types.

use crate::{ConfigError, InaraError};

/// Aggregate of every error the gateway can produce.
///
/// # Examples
///
/// ```
/// use elite_error::{ConfigError, EliteError};
///
/// let err: EliteError = ConfigError::new("Missing api_key").into();
/// assert!(format!("{}", err).contains("Inara configuration error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum EliteErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Inara API error
    #[from(InaraError)]
    Inara(InaraError),
}

/// Elite Status error with kind discrimination.
///
/// # Examples
///
/// ```
/// use elite_error::{EliteErrorKind, EliteResult, ConfigError};
///
/// fn might_fail() -> EliteResult<()> {
///     Err(ConfigError::new("Timeout must be positive"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), EliteErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Elite Status Error: {}", _0)]
pub struct EliteError(Box<EliteErrorKind>);

impl EliteError {
    /// Create a new error from a kind.
    pub fn new(kind: EliteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EliteErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to EliteErrorKind
impl<T> From<T> for EliteError
where
    T: Into<EliteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Elite Status operations.
pub type EliteResult<T> = std::result::Result<T, EliteError>;
