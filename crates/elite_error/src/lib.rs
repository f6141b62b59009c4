//! Error types for the Elite Status Inara gateway.
//!
//! This crate provides the error taxonomy shared by every other `elite_*` crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The Inara client surfaces three request failures to its callers (rate
//! limited, authentication, generic API error) and refuses to start on
//! invalid settings. Transport failures are an internal kind that the client
//! retries and never lets escape.
//!
//! # Examples
//!
//! ```
//! use elite_error::{EliteResult, InaraError, InaraErrorKind};
//!
//! fn fetch_profile() -> EliteResult<String> {
//!     Err(InaraError::new(InaraErrorKind::RateLimited(
//!         "Rate limit exceeded".to_string(),
//!     )))?
//! }
//!
//! assert!(fetch_profile().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod inara;

pub use config::ConfigError;
pub use error::{EliteError, EliteErrorKind, EliteResult};
pub use inara::{InaraError, InaraErrorKind, InaraResult, RetryableError};
