//! API error type and response mapping
//!
//! Every error body carries a human-readable `message` and an `error`
//! diagnostic string. Validation and not-found errors surface enough
//! detail to fix the request; storage errors are logged server-side and
//! returned as a generic failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use savorlog_common::validate::{describe, field_list, Violation};
use serde_json::json;
use tracing::error;

/// API errors, one variant per taxonomy entry
#[derive(Debug)]
pub enum ApiError {
    /// Missing or invalid required field(s)
    Validation(Vec<Violation>),
    /// Identifier failed the format check (raised before any store access)
    InvalidId(String),
    /// Well-formed id with no matching record
    NotFound(String),
    /// Connection or unexpected persistence failure
    Storage(savorlog_common::Error),
}

impl From<savorlog_common::Error> for ApiError {
    fn from(e: savorlog_common::Error) -> Self {
        Self::Storage(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, diagnostic) = match self {
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Validation failed. Check required fields ({}).",
                    field_list(&violations)
                ),
                describe(&violations),
            ),
            ApiError::InvalidId(message) => (
                StatusCode::BAD_REQUEST,
                message,
                "identifier failed format check".to_string(),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                message,
                "no matching record".to_string(),
            ),
            ApiError::Storage(e) => {
                // Log the real cause; the response stays generic
                error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error.".to_string(),
                    "unexpected storage failure".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
            "error": diagnostic,
        }));

        (status, body).into_response()
    }
}
