//! Email Value Object
//!
//! Represents a validated email address.
//! Basic format validation only; deliverability is not checked.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation, preserving the original case.
    ///
    /// Admin lookups compare the stored casing exactly, so admin emails
    /// are kept as entered.
    pub fn new(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into().trim().to_string();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    /// Create a new email with validation, lowercasing it first.
    ///
    /// User emails are case-folded so "User@X.com" and "user@x.com"
    /// resolve to the same account.
    pub fn new_lowercased(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into().trim().to_lowercase();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    fn validate(email: &str) -> AuthResult<()> {
        if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
            return Err(AuthError::InvalidEmail);
        }

        if !Self::is_valid_format(email) {
            return Err(AuthError::InvalidEmail);
        }

        Ok(())
    }

    /// Basic format check: non-empty local part, an `@`, and a domain
    /// containing a dot, with no whitespace anywhere.
    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }

        true
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user name@example.com").is_err());
    }

    #[test]
    fn test_email_preserves_case() {
        let email = Email::new("Admin@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Admin@Example.COM");
    }

    #[test]
    fn test_email_lowercased() {
        let email = Email::new_lowercased("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }
}
