//! Mapping of client errors onto HTTP responses.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use elite_error::{InaraError, InaraErrorKind};
use serde_json::json;
use tracing::error;

/// A failed route, rendered as `{"detail": ...}`.
#[derive(Debug, derive_more::From)]
pub enum ApiError {
    /// The Inara request failed
    Inara(InaraError),
    /// A path segment did not parse
    Path(PathRejection),
}

impl ApiError {
    /// Status code the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Path(rejection) => rejection.status(),
            ApiError::Inara(err) => match err.kind() {
                InaraErrorKind::Authentication { .. } => StatusCode::UNAUTHORIZED,
                InaraErrorKind::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                InaraErrorKind::Api { .. } => StatusCode::BAD_REQUEST,
                InaraErrorKind::Transport(_) | InaraErrorKind::Configuration(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Path(rejection) => rejection.body_text(),
            ApiError::Inara(err) if status == StatusCode::INTERNAL_SERVER_ERROR => {
                error!(error = %err, "Unexpected Inara failure");
                "Internal server error".to_string()
            }
            ApiError::Inara(err) => err.kind().to_string(),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
