//! Inara API client.
//!
//! [`InaraClient`] sends batched events to Inara's single POST endpoint. Each
//! call runs one pipeline: cache lookup, rate-limit admission, POST,
//! response classification, cache store. Transport failures are retried
//! with exponential backoff; anything the remote actually answered is not.
//!
//! [`MockInaraClient`] answers the same [`InaraApi`] operations from fixed
//! sample data without touching the network. [`connect`] picks one of the
//! two.
//!
//! # Example
//!
//! ```no_run
//! use elite_config::ConfigProvider;
//! use elite_inara::{InaraApi, connect};
//!
//! # async fn run() -> Result<(), elite_error::InaraError> {
//! let provider = ConfigProvider::new();
//! let api = connect(false, &provider);
//!
//! for faction in api.get_system_factions("Sol").await? {
//!     println!("{} {:.0}%", faction.faction_name, faction.faction_influence * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod client;
mod mock;
mod transport;

pub use api::{InaraApi, connect};
pub use client::{InaraClient, backoff_delays, classify};
pub use mock::MockInaraClient;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
