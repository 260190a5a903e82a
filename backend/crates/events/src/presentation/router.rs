//! Event Routers
//!
//! Two routers are exposed: the public events API (with an
//! admin-guarded delete) and the admin dashboard. The admin guard is
//! the auth crate's middleware over the admin principal domain.

use auth::domain::repository::PrincipalRepository;
use auth::presentation::handlers::AuthAppState;
use auth::presentation::middleware::require_principal;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::domain::repository::EventRepository;
use crate::presentation::handlers::{self, EventAppState};

/// Router for `/api/events`
pub fn events_router_generic<E, A>(repo: Arc<E>, admin_state: AuthAppState<A>) -> Router
where
    E: EventRepository + Clone + Send + Sync + 'static,
    A: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let state = EventAppState::new(repo);

    Router::new()
        .route(
            "/",
            post(handlers::create_event::<E>).get(handlers::list_events::<E>),
        )
        .route("/{id}", get(handlers::get_event::<E>))
        .route(
            "/{id}",
            delete(handlers::delete_event::<E>).route_layer(middleware::from_fn(
                move |req, next| {
                    let state = admin_state.clone();
                    async move { require_principal(state, req, next).await }
                },
            )),
        )
        .with_state(state)
}

/// Router for `/api/admin` (entirely admin-guarded)
pub fn admin_router_generic<E, A>(repo: Arc<E>, admin_state: AuthAppState<A>) -> Router
where
    E: EventRepository + Clone + Send + Sync + 'static,
    A: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let state = EventAppState::new(repo);

    Router::new()
        .route("/dashboard-stats", get(handlers::dashboard_stats::<E>))
        .route("/recent-events", get(handlers::recent_events::<E>))
        .route_layer(middleware::from_fn(move |req, next| {
            let state = admin_state.clone();
            async move { require_principal(state, req, next).await }
        }))
        .with_state(state)
}
