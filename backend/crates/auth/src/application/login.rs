//! Login Use Case
//!
//! Authenticates a principal and issues a session token. Every failure
//! short of a server error collapses into `InvalidCredentials` so the
//! response never reveals whether the email is registered.

use std::sync::Arc;

use chrono::Utc;

use crate::application::token::TokenIssuer;
use crate::domain::entity::Principal;
use crate::domain::kind::PrincipalKind;
use crate::domain::repository::PrincipalRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub principal: Principal,
    /// Session token for the cookie
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: PrincipalRepository,
{
    kind: PrincipalKind,
    repo: Arc<R>,
    issuer: Arc<TokenIssuer>,
}

impl<R> LoginUseCase<R>
where
    R: PrincipalRepository,
{
    pub fn new(kind: PrincipalKind, repo: Arc<R>, issuer: Arc<TokenIssuer>) -> Self {
        Self { kind, repo, issuer }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        // Users register with lowercased emails, so fold at lookup too.
        let email = match self.kind {
            PrincipalKind::Admin => input.email.trim().to_string(),
            PrincipalKind::User => input.email.trim().to_lowercase(),
        };

        let record = self
            .repo
            .find_by_email(self.kind, &email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = platform::password::ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !record.password_hash.verify(&password) {
            tracing::warn!(kind = %self.kind, "Failed login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let mut principal = record.principal;
        let now = Utc::now();
        self.repo
            .record_login(self.kind, principal.principal_id, now)
            .await?;
        principal.record_login(now);

        let token = self.issuer.issue(self.kind, principal.principal_id)?;

        tracing::info!(
            kind = %self.kind,
            principal_id = %principal.principal_id,
            "Principal logged in"
        );

        Ok(LoginOutput { principal, token })
    }
}
