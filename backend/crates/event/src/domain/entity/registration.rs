//! Registration Entity
//!
//! A user's attendance on an event. At most one per (event, user).

use chrono::{DateTime, Utc};

use crate::domain::value_object::{EventId, RegistrationId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub registration_id: RegistrationId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(event_id: EventId, user_id: UserId) -> Self {
        Self {
            registration_id: RegistrationId::new(),
            event_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
