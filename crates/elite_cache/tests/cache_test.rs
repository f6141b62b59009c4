//! Expiry and enablement behaviour of the response cache.

use elite_cache::{CacheKey, ResponseCache, ResponseCacheConfig};
use elite_models::{Event, EventName};
use serde_json::json;
use std::time::Duration;

fn key() -> CacheKey {
    CacheKey::new(
        Some("CMDR Test"),
        &[Event::new(EventName::GetCommanderProfile)],
    )
}

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let cache = ResponseCache::new(ResponseCacheConfig::default().with_ttl_secs(10));
    cache.store(key(), json!({"n": 1}));

    tokio::time::advance(Duration::from_secs(9)).await;
    assert_eq!(cache.lookup(&key()), Some(json!({"n": 1})));

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(cache.lookup(&key()).is_none());
    // Lazy expiry: the entry is still stored
    assert_eq!(cache.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_store_overwrites_and_refreshes() {
    let cache = ResponseCache::new(ResponseCacheConfig::default().with_ttl_secs(10));
    cache.store(key(), json!({"n": 1}));
    tokio::time::advance(Duration::from_secs(8)).await;
    cache.store(key(), json!({"n": 2}));
    tokio::time::advance(Duration::from_secs(8)).await;

    assert_eq!(cache.lookup(&key()), Some(json!({"n": 2})));
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_disabled_cache_stores_nothing() {
    let cache = ResponseCache::new(ResponseCacheConfig::default().with_enabled(false));
    cache.store(key(), json!({"n": 1}));

    assert!(cache.is_empty());
    assert!(cache.lookup(&key()).is_none());
}

#[tokio::test]
async fn test_clear_drops_everything() {
    let cache = ResponseCache::new(ResponseCacheConfig::default());
    cache.store(key(), json!({"n": 1}));
    cache.store(
        CacheKey::new(None, &[Event::new(EventName::GetCommanderShips)]),
        json!({"n": 2}),
    );
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.lookup(&key()).is_none());
}
