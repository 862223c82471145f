//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce plain-text error bodies with the
//! status codes clients of this service already depend on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cashback_core::CoreError;
use cashback_storage::StorageError;

/// API errors with HTTP status code mapping.
///
/// The two wrong-method variants intentionally map to different codes: the
/// offer table has always answered 404, the card endpoint 405.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Wrong method on the offer table (404).
    #[error("Method is not supported.")]
    MethodNotSupported,

    /// Wrong method on the card endpoint (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body could not be decoded (400). Carries the decoder message.
    #[error("{0}")]
    MalformedBody(String),

    /// No route matches the request path (404).
    #[error("404 page not found")]
    RouteNotFound,

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotSupported | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::InternalError(msg) = &self {
            tracing::error!("Internal Server Error: {}", msg);
        }
        (status, self.to_string()).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Decode(_) => ApiError::MalformedBody(err.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
