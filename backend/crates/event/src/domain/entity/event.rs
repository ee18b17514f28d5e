//! Event Entity
//!
//! An event published by a user. Only its creator may change or remove it.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{EventId, UserId};

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    /// Owning user; always the authenticated caller at creation
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event owned by `creator_id`
    pub fn new(
        title: String,
        description: Option<String>,
        date: DateTime<Utc>,
        location: Option<String>,
        creator_id: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            event_id: EventId::new(),
            title,
            description,
            date,
            location,
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.creator_id == *user_id
    }
}

/// Public identity of an event's creator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorSummary {
    pub name: String,
    /// Only disclosed on the single-event view
    pub email: Option<String>,
}

/// Event joined with its creator
#[derive(Debug, Clone)]
pub struct EventWithCreator {
    pub event: Event,
    pub creator: CreatorSummary,
}
