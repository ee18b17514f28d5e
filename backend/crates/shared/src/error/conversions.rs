//! Error conversions - From implementations for common error types
//!
//! Provides conversion from request-body errors to [`AppError`],
//! PostgreSQL SQLSTATE helpers for repositories,
//! and the HTTP rendering of [`AppError`].

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request("invalid JSON body").with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// PostgreSQL SQLSTATE for `unique_violation`
#[cfg(feature = "sqlx")]
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`
#[cfg(feature = "sqlx")]
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE of a database error, if the error came from the server
#[cfg(feature = "sqlx")]
pub fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}

/// Name of the constraint the database reported as violated
#[cfg(feature = "sqlx")]
pub fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

/// Whether the error is a unique constraint violation
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(UNIQUE_VIOLATION)
}

/// Whether the error is a foreign key violation
#[cfg(feature = "sqlx")]
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(FOREIGN_KEY_VIOLATION)
}

/// Whether the store rejected the submitted data itself
///
/// Class 22 (data exception) and class 23 (integrity constraint violation).
#[cfg(feature = "sqlx")]
pub fn is_data_rejection(err: &sqlx::Error) -> bool {
    matches!(sqlstate(err), Some(code) if code.starts_with("22") || code.starts_with("23"))
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

        (status, Json(self.to_body())).into_response()
    }
}
