//! Create Event Use Case

use std::sync::Arc;

use crate::application::{optional, required};
use crate::domain::entity::event::Event;
use crate::domain::repository::EventRepository;
use crate::domain::value_object::UserId;
use crate::domain::value_object::event_date::parse_event_date;
use crate::error::EventResult;

/// Create event input
///
/// The creator comes from the authenticated caller, never from the body.
#[derive(Debug, Default)]
pub struct CreateEventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// Create event use case
pub struct CreateEventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> CreateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, creator_id: UserId, input: CreateEventInput) -> EventResult<Event> {
        let title = required("title", input.title)?;
        let date = required("date", input.date)?;
        let date = parse_event_date(&date)?;

        let event = Event::new(
            title,
            optional(input.description),
            date,
            optional(input.location),
            creator_id,
        );

        self.repo.create(&event).await?;

        tracing::info!(
            event_id = %event.event_id,
            creator_id = %event.creator_id,
            "Event created"
        );

        Ok(event)
    }
}
