//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field was absent or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field was present but unacceptable
    #[error("{0}")]
    Validation(String),

    /// Email already registered
    #[error("email already in use")]
    EmailTaken,

    /// No user with that email
    #[error("user not found")]
    UserNotFound,

    /// Wrong password
    #[error("invalid password")]
    InvalidCredentials,

    /// No Authorization header
    #[error("token not provided")]
    TokenMissing,

    /// Authorization header is not `Bearer <token>`
    #[error("malformed token")]
    TokenMalformed,

    /// Bad signature, bad structure, or expired
    #[error("invalid token")]
    TokenInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingField(_) | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenMalformed
            | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a fixed message; their details only go to the log.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal("internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Rejected invalid bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::Missing => AuthError::TokenMissing,
            BearerError::Malformed => AuthError::TokenMalformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingField("email"), StatusCode::BAD_REQUEST),
            (AuthError::EmailTaken, StatusCode::CONFLICT),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::TokenMissing, StatusCode::UNAUTHORIZED),
            (AuthError::TokenMalformed, StatusCode::UNAUTHORIZED),
            (AuthError::TokenInvalid, StatusCode::UNAUTHORIZED),
            (
                AuthError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected, "{err}");
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_internal_details_not_exposed() {
        let app = AuthError::Internal("connection string leaked".into()).to_app_error();
        assert_eq!(app.message(), "internal server error");
    }

    #[test]
    fn test_gate_messages() {
        assert_eq!(AuthError::TokenMissing.to_app_error().message(), "token not provided");
        assert_eq!(AuthError::TokenMalformed.to_app_error().message(), "malformed token");
        assert_eq!(AuthError::TokenInvalid.to_app_error().message(), "invalid token");
    }

    #[test]
    fn test_bearer_error_conversion() {
        assert!(matches!(
            AuthError::from(BearerError::Missing),
            AuthError::TokenMissing
        ));
        assert!(matches!(
            AuthError::from(BearerError::Malformed),
            AuthError::TokenMalformed
        ));
    }
}
