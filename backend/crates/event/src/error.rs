//! Event Error Types
//!
//! This module provides event-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Event-specific result type alias
pub type EventResult<T> = Result<T, EventError>;

/// Event-specific error variants
#[derive(Debug, Error)]
pub enum EventError {
    /// A required request field was absent or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// `date` did not parse to a timestamp
    #[error("invalid date format")]
    InvalidDate,

    /// Update carried no usable field
    #[error("nothing to update")]
    NothingToUpdate,

    /// The store refused the row (constraint or data exception)
    #[error("could not create event")]
    Rejected,

    /// Event does not exist
    #[error("event not found")]
    EventNotFound,

    /// Caller's user row no longer exists
    #[error("user not found")]
    UserNotFound,

    /// Caller is not the event's creator
    #[error("you do not have permission to {0} this event")]
    NotCreator(&'static str),

    /// (event, user) registration already exists
    #[error("already registered for this event")]
    AlreadyRegistered,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EventError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EventError::MissingField(_)
            | EventError::InvalidDate
            | EventError::NothingToUpdate
            | EventError::Rejected => ErrorKind::BadRequest,
            EventError::EventNotFound | EventError::UserNotFound => ErrorKind::NotFound,
            EventError::NotCreator(_) => ErrorKind::Forbidden,
            EventError::AlreadyRegistered => ErrorKind::Conflict,
            EventError::Database(_) | EventError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; server-side details stay in the log
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
            EventError::Database(e) => {
                tracing::error!(error = %e, "Event database error");
            }
            EventError::Internal(msg) => {
                tracing::error!(message = %msg, "Event internal error");
            }
            EventError::NotCreator(action) => {
                tracing::warn!(action = %action, "Non-creator tried to modify event");
            }
            _ => {
                tracing::debug!(error = %self, "Event error");
            }
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        err.to_app_error()
    }
}
