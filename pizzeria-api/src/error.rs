use axum::{http::StatusCode, response::Json};
use pizzeria_store::{StoreError, validation::ValidationError};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Integrity(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { entity, .. } => ApiError::NotFound(entity),
            StoreError::Validation(e) => ApiError::Validation(e),
            StoreError::Integrity(message) => ApiError::Integrity(message),
            e => ApiError::InternalError(e.to_string()),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.to_string() }),
            ),
            ApiError::MissingFields(_)
            | ApiError::Validation(_)
            | ApiError::Integrity(_)
            | ApiError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [self.to_string()] }),
            ),
            ApiError::InternalError(msg) => {
                error!(%msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
