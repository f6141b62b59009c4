//! Load-once access to a validated configuration snapshot.

use crate::InaraConfig;
use elite_error::EliteResult;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

type Loader = Box<dyn Fn() -> EliteResult<InaraConfig> + Send + Sync>;

/// Caches one [`InaraConfig`] snapshot behind an explicit handle.
///
/// The first [`get`](ConfigProvider::get) runs the loader and validates; later
/// calls hand out the same `Arc` until [`reset`](ConfigProvider::reset).
/// A failed load is not cached, so the next `get` tries again.
///
/// # Example
///
/// ```
/// use elite_config::{ConfigProvider, InaraConfig};
///
/// let provider = ConfigProvider::with_loader(|| {
///     InaraConfig::from_vars([("INARA_API_KEY", "abc123")])
/// });
/// let first = provider.get().unwrap();
/// let second = provider.get().unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
pub struct ConfigProvider {
    loader: Loader,
    snapshot: RwLock<Option<Arc<InaraConfig>>>,
}

impl std::fmt::Debug for ConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded = self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        f.debug_struct("ConfigProvider")
            .field("loaded", &loaded)
            .finish_non_exhaustive()
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider {
    /// Provider backed by [`InaraConfig::load`].
    pub fn new() -> Self {
        Self::with_loader(InaraConfig::load)
    }

    /// Provider backed by a custom loader.
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> EliteResult<InaraConfig> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            snapshot: RwLock::new(None),
        }
    }

    /// Get the cached snapshot, loading it on first access.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when no snapshot is cached and loading fails.
    pub fn get(&self) -> EliteResult<Arc<InaraConfig>> {
        if let Some(config) = self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(config));
        }

        let mut slot = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded while we waited for the write lock
        if let Some(config) = slot.as_ref() {
            return Ok(Arc::clone(config));
        }

        debug!("Loading configuration snapshot");
        let config = Arc::new((self.loader)()?);
        *slot = Some(Arc::clone(&config));
        info!(base_url = %config.base_url, "Configuration snapshot cached");
        Ok(config)
    }

    /// Drop the cached snapshot so the next [`get`](ConfigProvider::get) reloads.
    pub fn reset(&self) {
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        debug!("Configuration snapshot reset");
    }
}
