//! API error taxonomy.
//!
//! Two client-visible shapes: field-scoped validation problems (bad id
//! shape, duplicate key on create) and one standardized not-found body
//! used by every miss path.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client error scoped to a single request field.
    #[error("validation failed on `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    /// The requested key is not in the directory.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::Validation {
            field: "id",
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { field, message } => {
                tracing::warn!("Validation error on {}: {}", field, message);

                // Body maps each failing field to an array of messages.
                let mut errors = serde_json::Map::new();
                errors.insert(field.to_string(), serde_json::json!([message]));
                let body = serde_json::json!({ "errors": errors });

                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
