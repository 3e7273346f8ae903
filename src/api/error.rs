use crate::error::FarmBrainError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

/// Error returned by API handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// Body could not be read, parsed or validated; keeps the extractor's status code.
    Rejected(StatusCode, String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<FarmBrainError> for ApiError {
    fn from(err: FarmBrainError) -> Self {
        match err {
            FarmBrainError::NotFound(msg) => ApiError::NotFound(msg),
            err @ FarmBrainError::Validation { .. } => {
                ApiError::Rejected(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            other => ApiError::Rejected(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Rejected(status, msg) => (status, msg),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        } else if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %message, "request rejected");
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
