//! Event Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (create, list, get, update, delete, register)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Mutations require a bearer token (see `auth`), and
//! only an event's creator may update or delete it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{EventError, EventResult};
pub use infra::postgres::PgEventRepository;
pub use presentation::router::{event_router, event_router_generic};
