pub mod github;
pub mod index;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::ServiceError;

/// Boundary error for all handlers. Detail is logged server-side when the
/// error is classified; the caller only ever sees the fixed bodies below.
pub enum ApiError {
    NotFound,
    InvalidRequest(&'static str),
    Internal,
}

impl ApiError {
    /// Classifies a remote failure: a remote 404 surfaces as 404, anything
    /// else collapses into the generic 500.
    pub fn from_remote(err: ServiceError) -> Self {
        tracing::error!("{}", err);
        match err.status() {
            Some(404) => ApiError::NotFound,
            _ => ApiError::Internal,
        }
    }

    /// Collapses any remote failure into the generic 500, regardless of the
    /// remote status.
    pub fn internal(err: ServiceError) -> Self {
        tracing::error!("{}", err);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Repository not found"),
            ApiError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!"),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
