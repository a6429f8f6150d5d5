//! Error types for the board API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lead_store::{FieldError, StoreError};
use thiserror::Error;

/// Errors that can occur while handling an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed schema validation.
    #[error("{message}")]
    Validation {
        message: &'static str,
        errors: Vec<FieldError>,
    },

    /// Request was malformed.
    #[error("{0}")]
    BadRequest(String),

    /// Referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure. Only `context` reaches the caller.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Map a store failure on a lead lookup: missing leads become 404,
    /// anything else is an opaque 500 carrying `context`.
    pub fn from_lead_store(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |err| match err {
            StoreError::NotFound { .. } => ApiError::NotFound("Lead not found".to_string()),
            other => ApiError::Internal {
                context,
                source: other,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "message": message,
                    "errors": errors,
                }),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": message }),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": message }),
            ),
            ApiError::Internal { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "message": context }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::Validation {
            message: "Invalid lead data",
            errors: vec![FieldError::new("name", "Required")],
        };
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from_lead_store("Failed to update lead")(StoreError::NotFound {
            entity: "Lead",
            id: "9".to_string(),
        });
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let internal = ApiError::from_lead_store("Failed to update lead")(
            StoreError::AlreadyExists {
                entity: "Lead",
                id: "9".to_string(),
            },
        );
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
