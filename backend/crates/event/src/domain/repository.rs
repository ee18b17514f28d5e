//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::event::{Event, EventWithCreator};
use crate::domain::entity::registration::Registration;
use crate::domain::value_object::EventId;
use crate::domain::value_object::event_patch::EventPatch;
use crate::error::EventResult;

/// Event repository trait
#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    /// Insert a new event
    ///
    /// Fails with `EventError::Rejected` when the store refuses the row.
    async fn create(&self, event: &Event) -> EventResult<()>;

    /// All events with creator name, ordered by date then id
    async fn find_all_with_creator(&self) -> EventResult<Vec<EventWithCreator>>;

    /// One event with creator name and email
    async fn find_with_creator(&self, event_id: &EventId) -> EventResult<Option<EventWithCreator>>;

    /// Find event by ID
    async fn find_by_id(&self, event_id: &EventId) -> EventResult<Option<Event>>;

    /// Apply the supplied fields, returning the updated event if it still exists
    async fn update(&self, event_id: &EventId, patch: &EventPatch) -> EventResult<Option<Event>>;

    /// Delete an event; `false` when no row matched
    async fn delete(&self, event_id: &EventId) -> EventResult<bool>;
}

/// Registration repository trait
#[trait_variant::make(RegistrationRepository: Send)]
pub trait LocalRegistrationRepository {
    /// Insert a registration
    ///
    /// Fails with `EventError::AlreadyRegistered` on a duplicate (event, user)
    /// pair and `EventError::EventNotFound` when the event is gone.
    async fn create_registration(&self, registration: &Registration) -> EventResult<()>;
}
