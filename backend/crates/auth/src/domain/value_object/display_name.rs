//! Display Name Value Object

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Principal display name (the `adminName` / `userName` wire field)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with validation
    pub fn new(name: impl Into<String>) -> AuthResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if name.len() > DISPLAY_NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Name must be at most {} characters",
                DISPLAY_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_valid() {
        assert!(DisplayName::new("Alice").is_ok());
        assert_eq!(DisplayName::new("  Alice  ").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_display_name_empty_is_missing_field() {
        assert!(matches!(
            DisplayName::new("   "),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn test_display_name_too_long() {
        assert!(DisplayName::new("x".repeat(101)).is_err());
    }
}
