//! Unified error handling for the request router.
//!
//! Provides a unified `AppError` type mapping engine failures to the status
//! codes and `{"detail": ...}` bodies the demo UI expects. All route
//! handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the mock backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Storage write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Storage(_)) {
            tracing::error!(error = %self, "request error");
        }

        let status = match &self {
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let detail = match &self {
            Self::Auth(AuthError::InvalidCredentials) => "Invalid credentials".to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::BadRequest(message) => message.clone(),
            Self::Storage(_) => "Internal server error".to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product".to_string());
        assert_eq!(err.to_string(), "not found: Product");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Storage(StorageError::LockPoisoned)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
