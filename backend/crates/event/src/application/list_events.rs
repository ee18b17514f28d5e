//! List Events Use Case

use std::sync::Arc;

use crate::domain::entity::event::EventWithCreator;
use crate::domain::repository::EventRepository;
use crate::error::EventResult;

pub struct ListEventsUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> ListEventsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every event, no paging
    pub async fn execute(&self) -> EventResult<Vec<EventWithCreator>> {
        self.repo.find_all_with_creator().await
    }
}
