//! Auth Router
//!
//! The same router shape is mounted twice, once per principal domain:
//! `/api/adminAuth` and `/api/userAuth`.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::kind::PrincipalKind;
use crate::domain::repository::PrincipalRepository;
use crate::infra::postgres::PgPrincipalRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_principal;

/// Create an Auth router for one principal domain with the PostgreSQL
/// repository
pub fn auth_router(kind: PrincipalKind, repo: PgPrincipalRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(kind, Arc::new(repo), config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(kind: PrincipalKind, repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(kind, repo, config);
    let guard_state = state.clone();

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .route(
            "/check-auth",
            get(handlers::check_auth::<R>).route_layer(middleware::from_fn(
                move |req, next| {
                    let state = guard_state.clone();
                    async move { require_principal(state, req, next).await }
                },
            )),
        )
        .with_state(state)
}
