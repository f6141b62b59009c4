//! Configuration for the Inara API integration.
//!
//! Settings are loaded from layered sources with the `config` crate:
//! - Bundled defaults (include_str! from inara.toml)
//! - User overrides (~/.config/elite_status/inara.toml, then ./inara.toml)
//! - `INARA_`-prefixed environment variables, highest precedence
//!
//! The loaded [`InaraConfig`] is an immutable, validated snapshot. Components
//! receive it by reference; [`ConfigProvider`] caches one snapshot for callers
//! that want load-once semantics without a process-wide global.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod inara;
mod provider;

pub use inara::InaraConfig;
pub use provider::ConfigProvider;
