//! Time-bounded cache for Inara responses.
//!
//! Entries are keyed by commander and a digest of the submitted events, so
//! the same question asked twice within the TTL is answered locally.
//! Expiry is checked lazily on lookup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;

pub use cache::{
    CacheEntry, CacheKey, ResponseCache, ResponseCacheConfig, ResponseCacheConfigBuilder,
};
