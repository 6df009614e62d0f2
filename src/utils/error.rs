use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidFieldError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::MissingFieldError { .. } | ServiceError::InvalidFieldError { .. } => {
                tracing::debug!("Rejected payload: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid payload" })),
                )
                    .into_response()
            }
            other => {
                // Generation and persistence failures are not distinguished
                // at the request boundary; both surface as the generic 500.
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Database error", "details": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
