//! Register Use Case
//!
//! Creates a new principal and issues an initial session token, so
//! registration doubles as the first login.

use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::domain::entity::Principal;
use crate::domain::kind::PrincipalKind;
use crate::domain::repository::PrincipalRepository;
use crate::domain::value_object::{ContactNumber, DisplayName, Email};
use crate::error::{AuthError, AuthResult};

/// Registration input
pub struct RegisterInput {
    pub display_name: String,
    pub email: String,
    pub password: String,
    /// Required when registering a user, ignored for admins
    pub contact_number: Option<String>,
}

/// Registration output
#[derive(Debug)]
pub struct RegisterOutput {
    pub principal: Principal,
    /// Session token for the cookie
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: PrincipalRepository,
{
    kind: PrincipalKind,
    repo: Arc<R>,
    issuer: Arc<TokenIssuer>,
}

impl<R> RegisterUseCase<R>
where
    R: PrincipalRepository,
{
    pub fn new(kind: PrincipalKind, repo: Arc<R>, issuer: Arc<TokenIssuer>) -> Self {
        Self { kind, repo, issuer }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if input.password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        let display_name = DisplayName::new(&input.display_name)?;
        let email = match self.kind {
            PrincipalKind::Admin => Email::new(&input.email)?,
            PrincipalKind::User => Email::new_lowercased(&input.email)?,
        };

        let principal = if self.kind.requires_contact_number() {
            let number = input.contact_number.ok_or(AuthError::MissingFields)?;
            let contact = ContactNumber::new(number)?;
            Principal::new_user(email, display_name, contact)
        } else {
            Principal::new_admin(email, display_name)
        };

        // Advisory pre-check: friendly rejection for the common case.
        // The unique index on the email column is the real authority;
        // a race past this check still fails at insert.
        if self
            .repo
            .exists_by_email(self.kind, principal.email.as_str())
            .await?
        {
            return Err(AuthError::AlreadyExists(self.kind));
        }

        let password = platform::password::ClearTextPassword::new(input.password)?;
        let password_hash = password.hash()?;

        self.repo.insert(&principal, &password_hash).await?;

        let token = self.issuer.issue(self.kind, principal.principal_id)?;

        tracing::info!(
            kind = %self.kind,
            principal_id = %principal.principal_id,
            "Principal registered"
        );

        Ok(RegisterOutput { principal, token })
    }
}
