//! PostgreSQL Repository Implementation
//!
//! One repository serves both principal tables. The admin and user
//! tables differ only in the user-specific columns, so the admin
//! queries select NULL casts for those and both sides decode into
//! the same row type.

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::PrincipalId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Principal;
use crate::domain::kind::PrincipalKind;
use crate::domain::repository::{PrincipalRecord, PrincipalRepository};
use crate::domain::value_object::{ContactNumber, DisplayName, Email};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed principal repository
#[derive(Clone)]
pub struct PgPrincipalRepository {
    pool: PgPool,
}

impl PgPrincipalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PrincipalRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: Option<String>,
    contact_number: Option<String>,
    is_verified: Option<bool>,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PrincipalRow {
    fn into_principal(self, kind: PrincipalKind) -> Principal {
        Principal {
            principal_id: PrincipalId::from_uuid(self.id),
            kind,
            email: Email::from_db(self.email),
            display_name: DisplayName::from_db(self.name),
            contact_number: self.contact_number.map(ContactNumber::from_db),
            is_verified: self.is_verified,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// SELECT column list per table. Admins have no contact_number or
/// is_verified column, so those come back as NULL casts.
fn select_columns(kind: PrincipalKind, with_password: bool) -> String {
    let password = if with_password {
        "password_hash"
    } else {
        "NULL::TEXT AS password_hash"
    };
    let user_columns = match kind {
        PrincipalKind::Admin => "NULL::TEXT AS contact_number, NULL::BOOLEAN AS is_verified",
        PrincipalKind::User => "contact_number, is_verified",
    };
    format!(
        "SELECT id, name, email, {password}, {user_columns}, \
         last_login_at, created_at, updated_at FROM {}",
        kind.table()
    )
}

impl PrincipalRepository for PgPrincipalRepository {
    async fn insert(
        &self,
        principal: &Principal,
        password_hash: &HashedPassword,
    ) -> AuthResult<()> {
        let result = match principal.kind {
            PrincipalKind::Admin => {
                sqlx::query(
                    r#"
                    INSERT INTO admins (
                        id, name, email, password_hash,
                        last_login_at, created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(principal.principal_id.as_uuid())
                .bind(principal.display_name.as_str())
                .bind(principal.email.as_str())
                .bind(password_hash.as_phc_string())
                .bind(principal.last_login_at)
                .bind(principal.created_at)
                .bind(principal.updated_at)
                .execute(&self.pool)
                .await
            }
            PrincipalKind::User => {
                sqlx::query(
                    r#"
                    INSERT INTO users (
                        id, name, email, contact_number, is_verified,
                        password_hash, last_login_at, created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(principal.principal_id.as_uuid())
                .bind(principal.display_name.as_str())
                .bind(principal.email.as_str())
                .bind(principal.contact_number.as_ref().map(|c| c.as_str()))
                .bind(principal.is_verified.unwrap_or(true))
                .bind(password_hash.as_phc_string())
                .bind(principal.last_login_at)
                .bind(principal.created_at)
                .bind(principal.updated_at)
                .execute(&self.pool)
                .await
            }
        };

        match result {
            Ok(_) => Ok(()),
            // The unique email index is the final duplicate authority
            Err(e) if is_unique_violation(&e) => Err(AuthError::AlreadyExists(principal.kind)),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> AuthResult<Option<PrincipalRecord>> {
        let sql = format!("{} WHERE email = $1", select_columns(kind, true));

        let row = sqlx::query_as::<_, PrincipalRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| {
            let hash = r
                .password_hash
                .clone()
                .ok_or_else(|| AuthError::Internal("principal row missing password hash".into()))?;
            let password_hash = HashedPassword::from_phc_string(hash)
                .map_err(|e| AuthError::Internal(e.to_string()))?;
            Ok(PrincipalRecord {
                principal: r.into_principal(kind),
                password_hash,
            })
        })
        .transpose()
    }

    async fn exists_by_email(&self, kind: PrincipalKind, email: &str) -> AuthResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE email = $1)",
            kind.table()
        );

        let exists: bool = sqlx::query_scalar(&sql)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn find_by_id(
        &self,
        kind: PrincipalKind,
        id: PrincipalId,
    ) -> AuthResult<Option<Principal>> {
        let sql = format!("{} WHERE id = $1", select_columns(kind, false));

        let row = sqlx::query_as::<_, PrincipalRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_principal(kind)))
    }

    async fn record_login(
        &self,
        kind: PrincipalKind,
        id: PrincipalId,
        at: DateTime<Utc>,
    ) -> AuthResult<()> {
        let sql = format!(
            "UPDATE {} SET last_login_at = $2, updated_at = $2 WHERE id = $1",
            kind.table()
        );

        sqlx::query(&sql)
            .bind(id.as_uuid())
            .bind(at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
