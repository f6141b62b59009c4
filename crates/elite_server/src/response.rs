//! Response bodies.

use serde::{Deserialize, Serialize};

/// Envelope for every successful route.
///
/// A missing entity is still HTTP 200, with `success: false` and no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the entity was found
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Payload
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Envelope for an entity Inara does not have.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Body of `GET /inara/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy`, `degraded` or `unhealthy`
    pub status: String,
    /// Probe outcome: `ok`, `mock`, `authentication_error`, `rate_limited` or `error`
    pub inara_api: String,
    /// `ok` or `missing`
    pub configuration: String,
    /// UTC check time
    pub timestamp: String,
}
