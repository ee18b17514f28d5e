//! Event Router

use auth::{AuthConfig, AuthGateState, require_bearer_token};
use axum::{
    Router,
    middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{EventRepository, RegistrationRepository};
use crate::infra::postgres::PgEventRepository;
use crate::presentation::handlers::{self, EventAppState};

/// Create the Event router with PostgreSQL repository
pub fn event_router(repo: PgEventRepository, config: Arc<AuthConfig>) -> Router {
    event_router_generic(repo, config)
}

/// Create a generic Event router for any repository implementation
///
/// Reads are public; every mutation sits behind the bearer gate.
pub fn event_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: EventRepository + RegistrationRepository + Clone + Send + Sync + 'static,
{
    let state = EventAppState {
        repo: Arc::new(repo),
    };

    // per-method layer: unsupported methods still fall through to 405
    let gate = middleware::from_fn_with_state(AuthGateState::new(config), require_bearer_token);

    Router::new()
        .route(
            "/",
            get(handlers::list_events::<R>)
                .merge(post(handlers::create_event::<R>).route_layer(gate.clone())),
        )
        .route(
            "/{id}",
            get(handlers::get_event::<R>).merge(
                put(handlers::update_event::<R>)
                    .delete(handlers::delete_event::<R>)
                    .route_layer(gate.clone()),
            ),
        )
        .route(
            "/{id}/register",
            post(handlers::register_for_event::<R>).route_layer(gate),
        )
        .with_state(state)
}
