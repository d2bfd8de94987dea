//! Mapping of store errors onto HTTP responses.

use super::protocol::ErrorResponse;
use crate::error::TodoError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] TodoError),

    /// Path segment that is not a todo id; it can never match a record.
    #[error("Todo not found")]
    InvalidId(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(TodoError::Validation) => StatusCode::BAD_REQUEST,
            ApiError::Store(TodoError::NotFound(_)) | ApiError::InvalidId(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
