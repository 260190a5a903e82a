//! Data Transfer Objects
//!
//! Wire shapes for the auth endpoints. Every field in the register
//! request is optional so a missing field maps to the domain's
//! "All fields are required" error instead of a generic 422.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::Principal;
use crate::domain::kind::PrincipalKind;

/// Registration request. The display name arrives as `adminName` on
/// the admin route and `userName` on the user route.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(alias = "adminName", alias = "userName")]
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "contactNumber")]
    pub contact_number: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Principal body as exposed over the wire. The password hash is not
/// part of this type, so it can never be serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalBody {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Principal> for PrincipalBody {
    fn from(p: &Principal) -> Self {
        Self {
            id: *p.principal_id.as_uuid(),
            name: p.display_name.as_str().to_string(),
            email: p.email.as_str().to_string(),
            contact_number: p.contact_number.as_ref().map(|c| c.as_str().to_string()),
            is_verified: p.is_verified,
            last_login: p.last_login_at,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Standard auth response envelope. The principal appears under
/// `admin` or `user` depending on the route.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<PrincipalBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PrincipalBody>,
}

impl AuthResponse {
    /// Success envelope carrying a principal under the kind's key
    pub fn with_principal(
        kind: PrincipalKind,
        message: Option<String>,
        principal: &Principal,
    ) -> Self {
        let body = PrincipalBody::from(principal);
        let (admin, user) = match kind {
            PrincipalKind::Admin => (Some(body), None),
            PrincipalKind::User => (None, Some(body)),
        };
        Self {
            success: true,
            message,
            admin,
            user,
        }
    }

    /// Success envelope with only a message
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            admin: None,
            user: None,
        }
    }
}
