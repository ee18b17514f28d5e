//! Get Event Use Case

use std::sync::Arc;

use crate::domain::entity::event::EventWithCreator;
use crate::domain::repository::EventRepository;
use crate::domain::value_object::EventId;
use crate::error::{EventError, EventResult};

pub struct GetEventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> GetEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, event_id: EventId) -> EventResult<EventWithCreator> {
        self.repo
            .find_with_creator(&event_id)
            .await?
            .ok_or(EventError::EventNotFound)
    }
}
