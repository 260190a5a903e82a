//! HTTP Handlers
//!
//! One set of handlers serves both the admin and the user routes; the
//! state carries the `PrincipalKind` the router was mounted for.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::token::TokenIssuer;
use crate::domain::kind::PrincipalKind;
use crate::domain::repository::PrincipalRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::presentation::middleware::AuthenticatedPrincipal;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    pub kind: PrincipalKind,
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub issuer: Arc<TokenIssuer>,
}

impl<R> AuthAppState<R>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    pub fn new(kind: PrincipalKind, repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let issuer = Arc::new(TokenIssuer::from_config(&config));
        Self {
            kind,
            repo,
            config,
            issuer,
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/{adminAuth,userAuth}/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let name = req.name.ok_or(AuthError::MissingFields)?;
    let email = req.email.ok_or(AuthError::MissingFields)?;
    let password = req.password.ok_or(AuthError::MissingFields)?;

    let use_case = RegisterUseCase::new(state.kind, state.repo.clone(), state.issuer.clone());

    let output = use_case
        .execute(RegisterInput {
            display_name: name,
            email,
            password,
            contact_number: req.contact_number,
        })
        .await?;

    let cookie = state
        .config
        .cookie_config(state.kind)
        .build_set_cookie(&output.token);

    let message = format!("{} created successfully", state.kind);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse::with_principal(
            state.kind,
            Some(message),
            &output.principal,
        )),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/{adminAuth,userAuth}/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let email = req.email.ok_or(AuthError::MissingFields)?;
    let password = req.password.ok_or(AuthError::MissingFields)?;

    let use_case = LoginUseCase::new(state.kind, state.repo.clone(), state.issuer.clone());

    let output = use_case.execute(LoginInput { email, password }).await?;

    let cookie = state
        .config
        .cookie_config(state.kind)
        .build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse::with_principal(
            state.kind,
            Some("Logged in successfully".to_string()),
            &output.principal,
        )),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/{adminAuth,userAuth}/logout
///
/// Stateless: the server only instructs the browser to drop the cookie.
/// A copy of the token kept elsewhere stays valid until it expires.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie_config(state.kind).build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse::message_only("Logged out successfully")),
    )
}

// ============================================================================
// Check Auth
// ============================================================================

/// GET /api/{adminAuth,userAuth}/check-auth
///
/// Runs behind the guard middleware, which re-fetched the principal
/// and stored it in request extensions.
pub async fn check_auth<R>(
    State(state): State<AuthAppState<R>>,
    axum::Extension(authenticated): axum::Extension<AuthenticatedPrincipal>,
) -> AuthResult<Json<AuthResponse>>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(AuthResponse::with_principal(
        state.kind,
        None,
        &authenticated.principal,
    )))
}
