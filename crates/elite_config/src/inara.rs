//! Inara API settings and their validation.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use elite_error::{ConfigError, EliteError, EliteResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../inara.toml");

/// Prefix for environment overrides (`INARA_API_KEY`, `INARA_CACHE_TTL`, ...)
const ENV_PREFIX: &str = "INARA";

/// Settings for the Inara API client.
///
/// All durations are stored in seconds, matching the environment surface.
/// Use the `*_duration` helpers to get [`Duration`] values.
///
/// # Example
///
/// ```
/// use elite_config::InaraConfig;
///
/// let config = InaraConfig {
///     api_key: "my-key".to_string(),
///     cache_ttl: 60,
///     ..InaraConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cache_ttl_duration().as_secs(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InaraConfig {
    /// Inara API key (required, whitespace is trimmed)
    #[serde(default)]
    pub api_key: String,

    /// Application name sent in every request header
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Application version sent in every request header
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Default commander for requests that do not name one
    #[serde(default)]
    pub commander_name: Option<String>,

    /// Inara API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Maximum number of retries after a transport failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry, in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay: f64,

    /// Multiplier applied to the delay on each further retry
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,

    /// Maximum requests admitted per window
    #[serde(default = "default_rate_limit_requests")]
    pub rate_limit_requests: u32,

    /// Rate limit window in seconds
    #[serde(default = "default_rate_limit_window")]
    pub rate_limit_window: u64,

    /// Whether responses are cached
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,

    /// Cache entry lifetime in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,
}

fn default_app_name() -> String {
    "EliteStatusCheck".to_string()
}

fn default_app_version() -> String {
    "1.1.0".to_string()
}

fn default_base_url() -> String {
    "https://inara.cz/inapi/v1/".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> f64 {
    1.0
}

fn default_backoff_factor() -> f64 {
    2.0
}

fn default_rate_limit_requests() -> u32 {
    100
}

fn default_rate_limit_window() -> u64 {
    3600 // 1 hour
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for InaraConfig {
    /// Defaults with an empty API key. The result does not validate until a
    /// key is supplied.
    fn default() -> Self {
        Self {
            api_key: String::new(),
            app_name: default_app_name(),
            app_version: default_app_version(),
            commander_name: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay: default_retry_delay(),
            backoff_factor: default_backoff_factor(),
            rate_limit_requests: default_rate_limit_requests(),
            rate_limit_window: default_rate_limit_window(),
            cache_enabled: default_cache_enabled(),
            cache_ttl: default_cache_ttl(),
        }
    }
}

impl InaraConfig {
    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source cannot be parsed or the
    /// result fails [`InaraConfig::validate`] (most commonly: no API key).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use elite_config::InaraConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = InaraConfig::load()?;
    /// println!("Inara endpoint: {}", config.base_url);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> EliteResult<Self> {
        debug!("Loading Inara configuration: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/elite_status/inara.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("inara").required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::build(builder)
    }

    /// Load bundled defaults overlaid with a specific file.
    ///
    /// The environment is not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> EliteResult<Self> {
        debug!("Loading Inara configuration from file");

        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::build(builder)
    }

    /// Load bundled defaults overlaid with an explicit set of `INARA_*` variables.
    ///
    /// Behaves like the environment layer of [`InaraConfig::load`] without
    /// touching the process environment.
    ///
    /// # Example
    ///
    /// ```
    /// use elite_config::InaraConfig;
    ///
    /// let config = InaraConfig::from_vars([
    ///     ("INARA_API_KEY", "abc123"),
    ///     ("INARA_CACHE_TTL", "60"),
    /// ])
    /// .unwrap();
    /// assert_eq!(config.cache_ttl, 60);
    /// ```
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> EliteResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let builder = Self::defaults().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(vars)),
        );
        Self::build(builder)
    }

    /// Check every setting, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::setting("api_key", "Inara API key is required"));
        }
        if self.timeout == 0 {
            return Err(ConfigError::setting("timeout", "Timeout must be positive"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::setting(
                "base_url",
                format!("Base URL must be an http(s) URL, got {}", self.base_url),
            ));
        }
        if !self.retry_delay.is_finite() || self.retry_delay < 0.0 {
            return Err(ConfigError::setting("retry_delay", "Retry delay cannot be negative"));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor < 1.0 {
            return Err(ConfigError::setting("backoff_factor", "Backoff factor must be at least 1.0"));
        }
        if self.rate_limit_requests == 0 {
            return Err(ConfigError::setting("rate_limit_requests", "Rate limit budget must be positive"));
        }
        if self.rate_limit_window == 0 {
            return Err(ConfigError::setting("rate_limit_window", "Rate limit window must be positive"));
        }
        Ok(())
    }

    /// Request timeout.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Delay before the first retry.
    pub fn retry_delay_duration(&self) -> Duration {
        Duration::from_secs_f64(self.retry_delay)
    }

    /// Rate limit window.
    pub fn rate_limit_window_duration(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window)
    }

    /// Cache entry lifetime.
    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// `User-Agent` value identifying this application.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.app_name, self.app_version)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> EliteResult<Self> {
        let mut config: Self = builder
            .build()
            .map_err(|e| {
                EliteError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                EliteError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.api_key = config.api_key.trim().to_string();
        config.commander_name = config
            .commander_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        config.validate()?;

        debug!(
            base_url = %config.base_url,
            cache_enabled = config.cache_enabled,
            rate_limit_requests = config.rate_limit_requests,
            "Inara configuration loaded"
        );
        Ok(config)
    }
}
