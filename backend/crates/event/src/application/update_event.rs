//! Update Event Use Case
//!
//! Creator-only partial update.

use std::sync::Arc;

use crate::domain::entity::event::Event;
use crate::domain::repository::EventRepository;
use crate::domain::value_object::event_patch::{EventChanges, EventPatch};
use crate::domain::value_object::{EventId, UserId};
use crate::error::{EventError, EventResult};

/// Update input; any subset of fields
pub type UpdateEventInput = EventChanges;

pub struct UpdateEventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// ## Errors
    /// - `EventNotFound` if the event does not exist
    /// - `NotCreator` if `caller_id` did not create it
    /// - `InvalidDate` / `NothingToUpdate` for an unusable body
    pub async fn execute(
        &self,
        event_id: EventId,
        caller_id: UserId,
        input: UpdateEventInput,
    ) -> EventResult<Event> {
        let event = self
            .repo
            .find_by_id(&event_id)
            .await?
            .ok_or(EventError::EventNotFound)?;

        if !event.is_owned_by(&caller_id) {
            return Err(EventError::NotCreator("edit"));
        }

        let patch = EventPatch::from_changes(input)?;

        // deleted between the lookup and the write
        let updated = self
            .repo
            .update(&event_id, &patch)
            .await?
            .ok_or(EventError::EventNotFound)?;

        tracing::info!(event_id = %event_id, "Event updated");

        Ok(updated)
    }
}
