//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::{
    is_data_rejection, is_foreign_key_violation, is_unique_violation, violated_constraint,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::event::{CreatorSummary, Event, EventWithCreator};
use crate::domain::entity::registration::Registration;
use crate::domain::repository::{EventRepository, RegistrationRepository};
use crate::domain::value_object::event_patch::EventPatch;
use crate::domain::value_object::{EventId, UserId};
use crate::error::{EventError, EventResult};

/// PostgreSQL-backed event and registration repository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl EventRepository for PgEventRepository {
    async fn create(&self, event: &Event) -> EventResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id,
                title,
                description,
                date,
                location,
                creator_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.title)
        .bind(event.description.as_deref())
        .bind(event.date)
        .bind(event.location.as_deref())
        .bind(event.creator_id.as_uuid())
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_data_rejection(&e) {
                tracing::debug!(error = %e, "Event insert rejected");
                EventError::Rejected
            } else {
                EventError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn find_all_with_creator(&self) -> EventResult<Vec<EventWithCreator>> {
        let rows = sqlx::query_as::<_, EventWithCreatorRow>(
            r#"
            SELECT
                e.id,
                e.title,
                e.description,
                e.date,
                e.location,
                e.creator_id,
                e.created_at,
                e.updated_at,
                u.name AS creator_name,
                NULL::text AS creator_email
            FROM events e
            JOIN users u ON u.id = e.creator_id
            ORDER BY e.date ASC, e.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_event_with_creator()).collect())
    }

    async fn find_with_creator(&self, event_id: &EventId) -> EventResult<Option<EventWithCreator>> {
        let row = sqlx::query_as::<_, EventWithCreatorRow>(
            r#"
            SELECT
                e.id,
                e.title,
                e.description,
                e.date,
                e.location,
                e.creator_id,
                e.created_at,
                e.updated_at,
                u.name AS creator_name,
                u.email AS creator_email
            FROM events e
            JOIN users u ON u.id = e.creator_id
            WHERE e.id = $1
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_event_with_creator()))
    }

    async fn find_by_id(&self, event_id: &EventId) -> EventResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT
                id,
                title,
                description,
                date,
                location,
                creator_id,
                created_at,
                updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_event()))
    }

    async fn update(&self, event_id: &EventId, patch: &EventPatch) -> EventResult<Option<Event>> {
        // NULL parameters leave the column untouched
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                date = COALESCE($5, date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id,
                title,
                description,
                date,
                location,
                creator_id,
                created_at,
                updated_at
            "#,
        )
        .bind(event_id.as_uuid())
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.location.as_deref())
        .bind(patch.date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_event()))
    }

    async fn delete(&self, event_id: &EventId) -> EventResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl RegistrationRepository for PgEventRepository {
    async fn create_registration(&self, registration: &Registration) -> EventResult<()> {
        sqlx::query(
            r#"
            INSERT INTO registrations (
                id,
                event_id,
                user_id,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(registration.registration_id.as_uuid())
        .bind(registration.event_id.as_uuid())
        .bind(registration.user_id.as_uuid())
        .bind(registration.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                EventError::AlreadyRegistered
            } else if is_foreign_key_violation(&e) {
                missing_registration_reference(violated_constraint(&e))
                    .unwrap_or(EventError::Database(e))
            } else {
                EventError::Database(e)
            }
        })?;

        Ok(())
    }
}

/// Foreign keys of the `registrations` table
const REGISTRATION_EVENT_FK: &str = "registrations_event_id_fkey";
const REGISTRATION_USER_FK: &str = "registrations_user_id_fkey";

/// Which side of a registration was missing, by violated foreign key
fn missing_registration_reference(constraint: Option<&str>) -> Option<EventError> {
    match constraint {
        Some(REGISTRATION_EVENT_FK) => Some(EventError::EventNotFound),
        Some(REGISTRATION_USER_FK) => Some(EventError::UserNotFound),
        _ => None,
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    date: DateTime<Utc>,
    location: Option<String>,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            event_id: EventId::from_uuid(self.id),
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            creator_id: UserId::from_uuid(self.creator_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EventWithCreatorRow {
    #[sqlx(flatten)]
    event: EventRow,
    creator_name: String,
    creator_email: Option<String>,
}

impl EventWithCreatorRow {
    fn into_event_with_creator(self) -> EventWithCreator {
        EventWithCreator {
            event: self.event.into_event(),
            creator: CreatorSummary {
                name: self.creator_name,
                email: self.creator_email,
            },
        }
    }
}
