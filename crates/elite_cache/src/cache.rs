//! Response cache implementation.

use derive_getters::Getters;
use elite_models::Event;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tokio::time::Instant;

/// Cached response with its insertion time.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    value: JsonValue,
    created_at: Instant,
}

impl CacheEntry {
    /// Whether the entry is older than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Cache key: commander plus a digest of the events' names and payloads.
///
/// Timestamps and custom IDs do not contribute, so a freshly built event for
/// the same question maps to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    commander: String,
    digest: String,
}

impl CacheKey {
    /// Build a key for a request.
    pub fn new(commander: Option<&str>, events: &[Event]) -> Self {
        let mut hasher = Sha256::new();
        for event in events {
            hasher.update(event.event_name.as_ref().as_bytes());
            hasher.update([0]);
            // Value serialization is deterministic (sorted map keys)
            let data = event
                .event_data
                .as_ref()
                .map(JsonValue::to_string)
                .unwrap_or_default();
            hasher.update(data.as_bytes());
            hasher.update([0]);
        }

        Self {
            commander: commander.unwrap_or_default().to_string(),
            digest: format!("{:x}", hasher.finalize()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.commander, self.digest)
    }
}

/// Configuration for the response cache.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct ResponseCacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,

    /// Entry lifetime (seconds)
    #[serde(default = "default_ttl")]
    #[builder(default = "default_ttl()")]
    ttl_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for ResponseCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ttl_secs: default_ttl(),
        }
    }
}

impl ResponseCacheConfig {
    /// Entry lifetime.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Shared response cache.
///
/// Lookups take a read lock; stale reads racing a store are tolerated.
/// There is no size bound: entries live until overwritten or cleared.
///
/// # Example
///
/// ```
/// use elite_cache::{CacheKey, ResponseCache, ResponseCacheConfig};
/// use elite_models::{Event, EventName};
/// use serde_json::json;
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = ResponseCache::new(ResponseCacheConfig::default().with_ttl_secs(60));
/// let key = CacheKey::new(Some("CMDR Test"), &[Event::new(EventName::GetCommanderProfile)]);
///
/// cache.store(key.clone(), json!({"events": []}));
/// assert_eq!(cache.lookup(&key), Some(json!({"events": []})));
///
/// cache.clear();
/// assert!(cache.lookup(&key).is_none());
/// # }
/// ```
#[derive(Debug)]
pub struct ResponseCache {
    config: ResponseCacheConfig,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new(config: ResponseCacheConfig) -> Self {
        tracing::debug!(
            enabled = config.enabled,
            ttl_secs = config.ttl_secs,
            "Creating new ResponseCache"
        );
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cache configuration.
    pub fn config(&self) -> &ResponseCacheConfig {
        &self.config
    }

    /// Cached value for `key`, if present and unexpired.
    ///
    /// Expired entries are left in place and reported as absent.
    #[tracing::instrument(skip(self), fields(key = %key))]
    pub fn lookup(&self, key: &CacheKey) -> Option<JsonValue> {
        if !self.config.enabled {
            return None;
        }

        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if entry.is_expired(self.config.ttl()) {
            tracing::debug!("Cache entry expired");
            return None;
        }

        tracing::debug!("Cache hit");
        Some(entry.value.clone())
    }

    /// Store `value` under `key`, replacing any previous entry.
    #[tracing::instrument(skip(self, value), fields(key = %key))]
    pub fn store(&self, key: CacheKey, value: JsonValue) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping store");
            return;
        }

        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, entry);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = entries.len();
        entries.clear();
        tracing::info!(dropped, "Cleared response cache");
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
