//! Delete Event Use Case

use std::sync::Arc;

use crate::domain::repository::EventRepository;
use crate::domain::value_object::{EventId, UserId};
use crate::error::{EventError, EventResult};

pub struct DeleteEventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Existence first, then ownership, then removal
    pub async fn execute(&self, event_id: EventId, caller_id: UserId) -> EventResult<()> {
        let event = self
            .repo
            .find_by_id(&event_id)
            .await?
            .ok_or(EventError::EventNotFound)?;

        if !event.is_owned_by(&caller_id) {
            return Err(EventError::NotCreator("delete"));
        }

        if !self.repo.delete(&event_id).await? {
            return Err(EventError::EventNotFound);
        }

        tracing::info!(event_id = %event_id, "Event deleted");

        Ok(())
    }
}
