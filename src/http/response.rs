//! Error responses for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors a handler can hand back to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no resource at {0}")]
    NotFound(String),
}

impl ApiError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status();
        let body = serde_json::json!({
            "error": error,
            "reason": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
