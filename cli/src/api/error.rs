//! HTTP error responses.
//!
//! Every failure is rendered as `{"error": "<message>"}` with the matching
//! status code, which is the shape the chat page expects.

use crate::core::error::FaqbotError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "Message cannot be empty";
pub const INTENT_NOT_FOUND: &str = "Intent not found";

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing message or unreadable body.
    BadRequest(String),
    /// 404 Not Found - unknown intent id.
    NotFound(String),
    /// 500 Internal Server Error - e.g. the index page is missing.
    Internal(String),
}

impl ApiError {
    pub fn empty_message() -> Self {
        ApiError::BadRequest(EMPTY_MESSAGE.to_string())
    }

    pub fn intent_not_found() -> Self {
        ApiError::NotFound(INTENT_NOT_FOUND.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<FaqbotError> for ApiError {
    fn from(err: FaqbotError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
