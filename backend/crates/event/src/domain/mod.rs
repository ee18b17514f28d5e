//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::event::{CreatorSummary, Event, EventWithCreator};
pub use entity::registration::Registration;
pub use repository::{EventRepository, RegistrationRepository};
