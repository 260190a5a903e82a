//! Contact Number Value Object
//!
//! Required for user registration only. Stored as entered apart from
//! trimming; no country-specific normalization.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

const CONTACT_NUMBER_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Create a new contact number with validation
    pub fn new(number: impl Into<String>) -> AuthResult<Self> {
        let number = number.into().trim().to_string();

        if number.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if number.len() > CONTACT_NUMBER_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Contact number must be at most {} characters",
                CONTACT_NUMBER_MAX_LENGTH
            )));
        }

        if !number
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
        {
            return Err(AuthError::Validation(
                "Contact number contains invalid characters".to_string(),
            ));
        }

        Ok(Self(number))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_number_valid() {
        assert!(ContactNumber::new("+81 90-1234-5678").is_ok());
        assert!(ContactNumber::new("(555) 123 4567").is_ok());
    }

    #[test]
    fn test_contact_number_invalid() {
        assert!(ContactNumber::new("").is_err());
        assert!(ContactNumber::new("call me").is_err());
        assert!(ContactNumber::new("1".repeat(33)).is_err());
    }
}
