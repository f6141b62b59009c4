//! HTTP routes over the Inara client.
//!
//! [`create_router`] exposes the [`InaraApi`](elite_inara::InaraApi)
//! operations as JSON endpoints under `/inara`. Successful calls answer with
//! an [`ApiResponse`] envelope; failed Inara requests map to 401, 429, 400
//! or 500 with a `{"detail": ...}` body.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod error;
mod response;

pub use api::{AppState, create_router};
pub use error::ApiError;
pub use response::{ApiResponse, HealthResponse};
