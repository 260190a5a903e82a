//! Principal Kind
//!
//! The auth flows are identical for admins and users except for a
//! handful of per-kind constants: the JWT claim key, the cookie name,
//! the backing table and the response envelope key. `PrincipalKind`
//! carries those constants so one set of use cases serves both domains.

use std::fmt;

/// Which principal collection a request operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrincipalKind {
    Admin,
    User,
}

impl PrincipalKind {
    /// JWT claim key carrying the principal id.
    ///
    /// The two domains deliberately use distinct keys so a token minted
    /// for one domain fails verification in the other.
    pub fn claim_key(&self) -> &'static str {
        match self {
            PrincipalKind::Admin => "adminId",
            PrincipalKind::User => "userId",
        }
    }

    /// Session cookie name for this domain
    pub fn cookie_name(&self) -> &'static str {
        match self {
            PrincipalKind::Admin => "adminToken",
            PrincipalKind::User => "userToken",
        }
    }

    /// Backing table name
    pub fn table(&self) -> &'static str {
        match self {
            PrincipalKind::Admin => "admins",
            PrincipalKind::User => "users",
        }
    }

    /// Key under which the principal body appears in JSON responses
    pub fn response_key(&self) -> &'static str {
        match self {
            PrincipalKind::Admin => "admin",
            PrincipalKind::User => "user",
        }
    }

    /// Users must supply a contact number at registration; admins must not.
    pub fn requires_contact_number(&self) -> bool {
        matches!(self, PrincipalKind::User)
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalKind::Admin => write!(f, "Admin"),
            PrincipalKind::User => write!(f, "User"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_keys_are_distinct() {
        assert_ne!(
            PrincipalKind::Admin.claim_key(),
            PrincipalKind::User.claim_key()
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(PrincipalKind::Admin.cookie_name(), "adminToken");
        assert_eq!(PrincipalKind::User.cookie_name(), "userToken");
        assert_eq!(PrincipalKind::Admin.table(), "admins");
        assert_eq!(PrincipalKind::User.table(), "users");
        assert_eq!(PrincipalKind::Admin.response_key(), "admin");
        assert_eq!(PrincipalKind::User.response_key(), "user");
        assert!(PrincipalKind::User.requires_contact_number());
        assert!(!PrincipalKind::Admin.requires_contact_number());
    }

    #[test]
    fn test_display() {
        assert_eq!(PrincipalKind::Admin.to_string(), "Admin");
        assert_eq!(PrincipalKind::User.to_string(), "User");
    }
}
