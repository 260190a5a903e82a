//! Principal Entity
//!
//! A principal is an authenticated account in either the admin or the
//! user collection. The two collections share one shape; the fields
//! that exist only on one side (`contact_number`, `is_verified`) are
//! optional and always `None` for admins.

use chrono::{DateTime, Utc};
use kernel::id::PrincipalId;

use crate::domain::kind::PrincipalKind;
use crate::domain::value_object::{ContactNumber, DisplayName, Email};

#[derive(Debug, Clone)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub kind: PrincipalKind,
    pub email: Email,
    pub display_name: DisplayName,
    /// Users only
    pub contact_number: Option<ContactNumber>,
    /// Users only; registration marks the account verified immediately
    pub is_verified: Option<bool>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// Create a new admin principal
    pub fn new_admin(email: Email, display_name: DisplayName) -> Self {
        let now = Utc::now();
        Self {
            principal_id: PrincipalId::new(),
            kind: PrincipalKind::Admin,
            email,
            display_name,
            contact_number: None,
            is_verified: None,
            last_login_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new user principal
    pub fn new_user(email: Email, display_name: DisplayName, contact_number: ContactNumber) -> Self {
        let now = Utc::now();
        Self {
            principal_id: PrincipalId::new(),
            kind: PrincipalKind::User,
            email,
            display_name,
            contact_number: Some(contact_number),
            is_verified: Some(true),
            last_login_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark a successful login
    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login_at = Some(at);
        self.updated_at = at;
    }
}
