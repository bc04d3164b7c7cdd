//! Error handling
//!
//! Validation failures are the only errors a client ever sees. Side-effect
//! failures (notifications) are swallowed where they happen.

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("validation failed: {0}")]
    ValidationError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        };

        tracing::debug!("Rejecting request: {}", self);

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
