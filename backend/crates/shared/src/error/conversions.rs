//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            std::io::ErrorKind::TimedOut => ErrorKind::RequestTimeout,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::internal("Formatting error").with_source(err)
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::bad_request("Invalid UTF-8 string").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AppError::bad_request("Invalid float format").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// MongoDB conversions (feature-gated)
// ============================================================================

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind as MongoErrorKind, WriteFailure};

        // https://www.mongodb.com/docs/manual/reference/error-codes/
        const DUPLICATE_KEY: i32 = 11000;

        let app_err = match err.kind.as_ref() {
            MongoErrorKind::ServerSelection { .. } => {
                AppError::service_unavailable("Document store unreachable")
            }
            MongoErrorKind::Io(_) => {
                AppError::service_unavailable("Document store connection error")
            }
            MongoErrorKind::ConnectionPoolCleared { .. } => {
                AppError::service_unavailable("Document store connection pool cleared")
            }
            MongoErrorKind::Authentication { .. } => {
                AppError::service_unavailable("Document store authentication failed")
            }
            MongoErrorKind::Write(WriteFailure::WriteError(write_err))
                if write_err.code == DUPLICATE_KEY =>
            {
                AppError::conflict("Duplicate key value")
            }
            MongoErrorKind::Write(_) => AppError::internal("Document store write failed"),
            MongoErrorKind::Command(command_err) if command_err.code == DUPLICATE_KEY => {
                AppError::conflict("Duplicate key value")
            }
            MongoErrorKind::Command(_) => AppError::internal("Document store command failed"),
            MongoErrorKind::BsonSerialization(_) | MongoErrorKind::BsonDeserialization(_) => {
                AppError::internal("Document mapping error")
            }
            _ => AppError::internal("Document store error"),
        };
        app_err.with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
