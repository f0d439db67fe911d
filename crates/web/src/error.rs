//! Unified error handling for route handlers.
//!
//! Catalog failures never reach this type - handlers degrade those to an
//! empty result with a user-facing notice. `AppError` covers the failures
//! that genuinely have no degraded rendering: session writes and fragment
//! composition.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session read/write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Template rendering failed while composing a fragment response.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session_error() -> AppError {
        let parse_failure = serde_json::from_str::<u32>("not json").unwrap_err();
        AppError::Session(tower_sessions::session::Error::SerdeJson(parse_failure))
    }

    #[test]
    fn test_app_error_display() {
        assert!(session_error().to_string().starts_with("Session error:"));
    }

    #[test]
    fn test_app_error_status_code() {
        let response = session_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
