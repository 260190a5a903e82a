//! Auth Guard Middleware
//!
//! Verifies a request's session token and re-fetches the principal
//! from storage on every request, so a deleted account loses access
//! immediately even while its token is still cryptographically valid.

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use platform::cookie::{extract_bearer, extract_cookie};

use crate::domain::entity::Principal;
use crate::domain::repository::PrincipalRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::handlers::AuthAppState;

use kernel::id::PrincipalId;

/// The verified principal, stored in request extensions by the guard
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub principal_id: PrincipalId,
    pub principal: Principal,
}

/// Resolve the request's principal from its cookie or bearer token.
///
/// Lookup order: the domain's cookie first, then the Authorization
/// header as a fallback for non-browser clients.
pub async fn resolve_principal<R>(
    state: &AuthAppState<R>,
    headers: &HeaderMap,
) -> AuthResult<AuthenticatedPrincipal>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(headers, state.kind.cookie_name())
        .or_else(|| extract_bearer(headers))
        .ok_or(AuthError::NoToken)?;

    let principal_id = state.issuer.verify_for(state.kind, &token)?;

    let principal = state
        .repo
        .find_by_id(state.kind, principal_id)
        .await?
        .ok_or(AuthError::PrincipalNotFound(state.kind))?;

    Ok(AuthenticatedPrincipal {
        principal_id,
        principal,
    })
}

/// Middleware that requires a valid principal of the state's kind
pub async fn require_principal<R>(
    state: AuthAppState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let authenticated = resolve_principal(&state, req.headers())
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(authenticated);

    Ok(next.run(req).await)
}
