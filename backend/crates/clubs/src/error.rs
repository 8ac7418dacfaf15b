//! Club Error Types
//!
//! Club-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::severity::Severity;
use thiserror::Error;

/// Club-specific result type alias
pub type ClubResult<T> = Result<T, ClubError>;

/// Club-specific error variants
#[derive(Debug, Error)]
pub enum ClubError {
    /// Club name collision (create or rename)
    #[error("Error: A club named '{0}' already exists.")]
    NameTaken(String),

    /// Input failed value-object validation
    #[error("{0}")]
    Validation(String),

    /// Club does not exist
    #[error("Club not found.")]
    NotFound,

    /// Acting member is not the club's officer
    #[error("You are not authorized to modify this club.")]
    Forbidden,

    /// No acting identity on the request
    #[error("Please log in to continue.")]
    Unauthorized,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClubError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClubError::NameTaken(_) => StatusCode::CONFLICT,
            ClubError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ClubError::NotFound => StatusCode::NOT_FOUND,
            ClubError::Forbidden => StatusCode::FORBIDDEN,
            ClubError::Unauthorized => StatusCode::UNAUTHORIZED,
            ClubError::Database(_) | ClubError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClubError::NameTaken(_) => ErrorKind::Conflict,
            ClubError::Validation(_) => ErrorKind::UnprocessableEntity,
            ClubError::NotFound => ErrorKind::NotFound,
            ClubError::Forbidden => ErrorKind::Forbidden,
            ClubError::Unauthorized => ErrorKind::Unauthorized,
            ClubError::Database(_) | ClubError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Presentational severity, matching the flash categories the
    /// frontend renders
    pub fn severity(&self) -> Severity {
        match self {
            ClubError::Validation(_) => Severity::Warning,
            _ => Severity::Danger,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ClubError::Database(e) => {
                tracing::error!(error = %e, "Club database error");
            }
            ClubError::Internal(msg) => {
                tracing::error!(message = %msg, "Club internal error");
            }
            ClubError::Forbidden => {
                tracing::warn!("Club modification denied");
            }
            _ => {
                tracing::debug!(error = %self, "Club error");
            }
        }
    }

    /// Convert to AppError, replacing store/internal detail with a
    /// generic client message
    fn to_app_error(&self) -> AppError {
        let message = match self {
            ClubError::Database(_) | ClubError::Internal(_) => {
                "A database error occurred.".to_string()
            }
            other => other.to_string(),
        };
        AppError::new(self.kind(), message).with_severity(self.severity())
    }
}

impl From<ClubError> for AppError {
    fn from(err: ClubError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ClubError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
