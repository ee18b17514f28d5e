//! Application Layer
//!
//! Use cases and application services.

pub mod create_event;
pub mod delete_event;
pub mod get_event;
pub mod list_events;
pub mod register_for_event;
pub mod update_event;

// Re-exports
pub use create_event::{CreateEventInput, CreateEventUseCase};
pub use delete_event::DeleteEventUseCase;
pub use get_event::GetEventUseCase;
pub use list_events::ListEventsUseCase;
pub use register_for_event::RegisterForEventUseCase;
pub use update_event::{UpdateEventInput, UpdateEventUseCase};

use crate::error::{EventError, EventResult};

/// Unwrap a required request field; absent and empty are both missing
pub(crate) fn required(field: &'static str, value: Option<String>) -> EventResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EventError::MissingField(field)),
    }
}

/// Optional text field; empty counts as absent
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
