//! Client-side rate limiting for the Inara API.
//!
//! Inara allows a fixed number of requests per rolling window. The
//! [`SlidingWindowLimiter`] records when each request was admitted and makes
//! callers wait until the oldest admission leaves the window once the budget
//! is spent.
//!
//! ```
//! use elite_rate_limit::SlidingWindowLimiter;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let limiter = SlidingWindowLimiter::new(2, Duration::from_secs(60)).unwrap();
//! limiter.admit().await;
//! assert!(limiter.try_admit().await);
//! assert!(!limiter.try_admit().await);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod limiter;

pub use error::{RateLimitError, RateLimitErrorKind};
pub use limiter::SlidingWindowLimiter;
