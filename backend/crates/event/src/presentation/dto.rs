//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::event::{CreatorSummary, Event, EventWithCreator};
use crate::domain::entity::registration::Registration;

// ============================================================================
// Requests
// ============================================================================

/// Create event request
///
/// `title` and `date` are required; checked by the use case so the
/// client gets the missing field's name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Update event request; any subset of fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Event as stored
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.event_id.into_uuid(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            location: event.location.clone(),
            creator_id: event.creator_id.into_uuid(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatorResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&CreatorSummary> for CreatorResponse {
    fn from(creator: &CreatorSummary) -> Self {
        Self {
            name: creator.name.clone(),
            email: creator.email.clone(),
        }
    }
}

/// Event with its creator joined in
#[derive(Debug, Clone, Serialize)]
pub struct EventWithCreatorResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub creator: CreatorResponse,
}

impl From<&EventWithCreator> for EventWithCreatorResponse {
    fn from(value: &EventWithCreator) -> Self {
        Self {
            event: EventResponse::from(&value.event),
            creator: CreatorResponse::from(&value.creator),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&Registration> for RegistrationResponse {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.registration_id.into_uuid(),
            event_id: registration.event_id.into_uuid(),
            user_id: registration.user_id.into_uuid(),
            created_at: registration.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterForEventResponse {
    pub message: String,
    pub registration: RegistrationResponse,
}
