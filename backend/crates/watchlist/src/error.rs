//! Watchlist Error Types
//!
//! This module provides watchlist-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Watchlist-specific result type alias
pub type WatchlistResult<T> = Result<T, WatchlistError>;

/// Watchlist-specific error variants
#[derive(Debug, Error)]
pub enum WatchlistError {
    /// Movie not found
    #[error("Movie not found")]
    MovieNotFound,

    /// Registration email already exists
    #[error("Email already registered")]
    EmailTaken,

    /// Invalid credentials (unknown email or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session carries no identity
    #[error("Not logged in")]
    Unauthenticated,

    /// Session token missing, malformed, or forged
    #[error("Session token rejected")]
    InvalidSession,

    /// Form input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Document store error
    #[error("Document store error: {0}")]
    Store(#[from] mongodb::error::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WatchlistError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WatchlistError::MovieNotFound => StatusCode::NOT_FOUND,
            WatchlistError::EmailTaken => StatusCode::CONFLICT,
            WatchlistError::InvalidCredentials
            | WatchlistError::Unauthenticated
            | WatchlistError::InvalidSession => StatusCode::UNAUTHORIZED,
            WatchlistError::Validation(_) => StatusCode::BAD_REQUEST,
            WatchlistError::Store(_) | WatchlistError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WatchlistError::MovieNotFound => ErrorKind::NotFound,
            WatchlistError::EmailTaken => ErrorKind::Conflict,
            WatchlistError::InvalidCredentials
            | WatchlistError::Unauthenticated
            | WatchlistError::InvalidSession => ErrorKind::Unauthorized,
            WatchlistError::Validation(_) => ErrorKind::BadRequest,
            WatchlistError::Store(_) | WatchlistError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Store errors go through the kernel conversion so that connectivity
    /// failures surface as 503 rather than a generic 500.
    pub fn into_app_error(self) -> AppError {
        match self {
            WatchlistError::Store(err) => AppError::from(err),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WatchlistError::Store(e) => {
                tracing::error!(error = %e, "Watchlist store error");
            }
            WatchlistError::Internal(msg) => {
                tracing::error!(message = %msg, "Watchlist internal error");
            }
            WatchlistError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            WatchlistError::InvalidSession => {
                tracing::warn!("Rejected session token");
            }
            _ => {
                tracing::debug!(error = %self, "Watchlist error");
            }
        }
    }
}

impl IntoResponse for WatchlistError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
