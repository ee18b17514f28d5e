//! HTTP Handlers

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::{
    CreateEventInput, CreateEventUseCase, DeleteEventUseCase, GetEventUseCase,
    ListEventsUseCase, RegisterForEventUseCase, UpdateEventInput, UpdateEventUseCase,
};
use crate::domain::repository::{EventRepository, RegistrationRepository};
use crate::domain::value_object::EventId;
use crate::error::{EventError, EventResult};
use crate::presentation::dto::{
    CreateEventRequest, EventResponse, EventWithCreatorResponse, RegisterForEventResponse,
    RegistrationResponse, UpdateEventRequest,
};

/// Shared state for event handlers
#[derive(Clone)]
pub struct EventAppState<R>
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// A path id that is not a UUID cannot name an event
fn parse_event_id(raw: &str) -> EventResult<EventId> {
    raw.parse().map_err(|_| EventError::EventNotFound)
}

/// GET /events
pub async fn list_events<R>(
    State(state): State<EventAppState<R>>,
) -> EventResult<Json<Vec<EventWithCreatorResponse>>>
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    let events = ListEventsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(events.iter().map(EventWithCreatorResponse::from).collect()))
}

/// GET /events/{id}
pub async fn get_event<R>(
    State(state): State<EventAppState<R>>,
    Path(id): Path<String>,
) -> EventResult<Json<EventWithCreatorResponse>>
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    let event_id = parse_event_id(&id)?;

    let event = GetEventUseCase::new(state.repo.clone())
        .execute(event_id)
        .await?;

    Ok(Json(EventWithCreatorResponse::from(&event)))
}

/// POST /events
pub async fn create_event<R>(
    State(state): State<EventAppState<R>>,
    user: AuthenticatedUser,
    JsonBody(req): JsonBody<CreateEventRequest>,
) -> EventResult<(StatusCode, Json<EventResponse>)>
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    let event = CreateEventUseCase::new(state.repo.clone())
        .execute(
            user.user_id,
            CreateEventInput {
                title: req.title,
                description: req.description,
                date: req.date,
                location: req.location,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(&event))))
}

/// PUT /events/{id}
pub async fn update_event<R>(
    State(state): State<EventAppState<R>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateEventRequest>,
) -> EventResult<Json<EventResponse>>
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    let event_id = parse_event_id(&id)?;

    let event = UpdateEventUseCase::new(state.repo.clone())
        .execute(
            event_id,
            user.user_id,
            UpdateEventInput {
                title: req.title,
                description: req.description,
                location: req.location,
                date: req.date,
            },
        )
        .await?;

    Ok(Json(EventResponse::from(&event)))
}

/// DELETE /events/{id}
pub async fn delete_event<R>(
    State(state): State<EventAppState<R>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> EventResult<StatusCode>
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    let event_id = parse_event_id(&id)?;

    DeleteEventUseCase::new(state.repo.clone())
        .execute(event_id, user.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /events/{id}/register
pub async fn register_for_event<R>(
    State(state): State<EventAppState<R>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> EventResult<(StatusCode, Json<RegisterForEventResponse>)>
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    let event_id = parse_event_id(&id)?;

    let registration = RegisterForEventUseCase::new(state.repo.clone())
        .execute(event_id, user.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterForEventResponse {
            message: "Registration successful".to_string(),
            registration: RegistrationResponse::from(&registration),
        }),
    ))
}
