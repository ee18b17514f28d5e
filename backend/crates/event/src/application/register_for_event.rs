//! Register For Event Use Case

use std::sync::Arc;

use crate::domain::entity::registration::Registration;
use crate::domain::repository::{EventRepository, RegistrationRepository};
use crate::domain::value_object::{EventId, UserId};
use crate::error::{EventError, EventResult};

pub struct RegisterForEventUseCase<R>
where
    R: EventRepository + RegistrationRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterForEventUseCase<R>
where
    R: EventRepository + RegistrationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// ## Errors
    /// - `EventNotFound` if the event does not exist
    /// - `AlreadyRegistered` if the caller is already on the event
    pub async fn execute(&self, event_id: EventId, user_id: UserId) -> EventResult<Registration> {
        if self.repo.find_by_id(&event_id).await?.is_none() {
            return Err(EventError::EventNotFound);
        }

        let registration = Registration::new(event_id, user_id);

        // (event, user) uniqueness is enforced by the store
        self.repo.create_registration(&registration).await?;

        tracing::info!(
            registration_id = %registration.registration_id,
            event_id = %event_id,
            user_id = %user_id,
            "Registration created"
        );

        Ok(registration)
    }
}
