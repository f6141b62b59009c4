//! Invalid or missing Inara settings.

use std::fmt;

/// A setting that could not be loaded or failed validation.
///
/// `setting` names the offending key (`api_key`, `timeout`, ...) when the
/// failure is tied to one; loading failures of a whole source leave it empty.
///
/// # Examples
///
/// ```
/// use elite_error::ConfigError;
///
/// let err = ConfigError::setting("timeout", "Timeout must be positive");
/// assert_eq!(err.setting, Some("timeout"));
/// assert!(err.to_string().starts_with("Invalid Inara setting `timeout`"));
///
/// let err = ConfigError::new("Failed to parse configuration");
/// assert!(err.setting.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Error)]
pub struct ConfigError {
    /// Offending setting, if one is to blame
    pub setting: Option<&'static str>,
    /// What is wrong
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Error not tied to a single setting.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::located(None, message.into())
    }

    /// Error blaming `setting`.
    #[track_caller]
    pub fn setting(setting: &'static str, message: impl Into<String>) -> Self {
        Self::located(Some(setting), message.into())
    }

    #[track_caller]
    fn located(setting: Option<&'static str>, message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting,
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.setting {
            Some(setting) => write!(f, "Invalid Inara setting `{}`: ", setting)?,
            None => write!(f, "Inara configuration error: ")?,
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
