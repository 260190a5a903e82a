//! Principal Repository Trait
//!
//! Storage abstraction over the two principal tables. Every method takes
//! the `PrincipalKind` so one implementation serves both collections.

use chrono::{DateTime, Utc};
use kernel::id::PrincipalId;
use platform::password::HashedPassword;

use crate::domain::entity::Principal;
use crate::domain::kind::PrincipalKind;
use crate::error::AuthResult;

/// A principal together with its stored credential, as loaded for login
#[derive(Debug, Clone)]
pub struct PrincipalRecord {
    pub principal: Principal,
    pub password_hash: HashedPassword,
}

#[trait_variant::make(PrincipalRepository: Send)]
pub trait LocalPrincipalRepository {
    /// Persist a new principal with its password hash.
    ///
    /// The table's unique email index is the final authority on
    /// duplicates; a violation surfaces as `AuthError::AlreadyExists`.
    async fn insert(&self, principal: &Principal, password_hash: &HashedPassword)
    -> AuthResult<()>;

    /// Load a principal and its password hash by email
    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> AuthResult<Option<PrincipalRecord>>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, kind: PrincipalKind, email: &str) -> AuthResult<bool>;

    /// Load a principal by id. The password hash is never fetched here.
    async fn find_by_id(
        &self,
        kind: PrincipalKind,
        id: PrincipalId,
    ) -> AuthResult<Option<Principal>>;

    /// Record a successful login timestamp
    async fn record_login(
        &self,
        kind: PrincipalKind,
        id: PrincipalId,
        at: DateTime<Utc>,
    ) -> AuthResult<()>;
}
