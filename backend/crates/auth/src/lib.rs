//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and token issuance
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, guard middleware
//!
//! ## Features
//! - Two parallel principal domains (Admin, User) served by one generic
//!   module parameterized over [`PrincipalKind`]
//! - Register/login/logout/check-auth with email + password
//! - Stateless JWT sessions carried in an HttpOnly cookie, with an
//!   `Authorization: Bearer` fallback
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never serialized to any response
//! - Distinct claim keys (`adminId` / `userId`) so a token issued for one
//!   domain is never accepted by the other domain's guard
//! - Guards re-resolve the principal from storage on every request, so a
//!   deleted account takes effect immediately despite stateless tokens
//! - Unknown email and wrong password produce identical responses

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{Claims, TokenError, TokenIssuer};
pub use domain::kind::PrincipalKind;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgPrincipalRepository;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{AuthenticatedPrincipal, require_principal};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPrincipalRepository as PrincipalStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
