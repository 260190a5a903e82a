//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

use crate::domain::kind::PrincipalKind;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field is absent or blank
    #[error("All fields are required")]
    MissingFields,

    /// Email format rejected at registration
    #[error("Invalid email format")]
    InvalidEmail,

    /// Other input validation failure (name, contact number, password policy)
    #[error("{0}")]
    Validation(String),

    /// Email already registered in this principal collection
    #[error("{0} already exists")]
    AlreadyExists(PrincipalKind),

    /// Wrong password or unknown email. Both cases map here so the
    /// response never reveals whether the email exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No cookie and no bearer header carried a token
    #[error("No authentication token provided")]
    NoToken,

    /// Token expiry is reported distinctly so the frontend can tell
    /// "session expired" apart from "log in again"
    #[error("Token expired")]
    TokenExpired,

    /// Bad signature or malformed token
    #[error("Invalid token")]
    TokenInvalid,

    /// Token is valid but carries the other domain's claim key
    #[error("Invalid token format")]
    TokenWrongDomain,

    /// Principal deleted between token issuance and this request
    #[error("{0} not found")]
    PrincipalNotFound(PrincipalKind),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// Duplicate registration keeps the legacy 400 wire status even though
    /// it is classified as a Conflict by [`AuthError::kind`].
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields
            | AuthError::InvalidEmail
            | AuthError::Validation(_)
            | AuthError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::NoToken
            | AuthError::TokenExpired
            | AuthError::TokenInvalid
            | AuthError::TokenWrongDomain
            | AuthError::PrincipalNotFound(_) => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields | AuthError::InvalidEmail | AuthError::Validation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::AlreadyExists(_) => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::NoToken
            | AuthError::TokenExpired
            | AuthError::TokenInvalid
            | AuthError::TokenWrongDomain
            | AuthError::PrincipalNotFound(_) => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::PrincipalNotFound(kind) => {
                tracing::warn!(kind = %kind, "Token presented for deleted principal");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<crate::application::token::TokenError> for AuthError {
    fn from(err: crate::application::token::TokenError) -> Self {
        use crate::application::token::TokenError;
        match err {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::TokenInvalid,
            TokenError::WrongDomain => AuthError::TokenWrongDomain,
            TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::AlreadyExists(PrincipalKind::Admin).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::NoToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::PrincipalNotFound(PrincipalKind::User).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_is_conflict_kind_with_legacy_status() {
        let err = AuthError::AlreadyExists(PrincipalKind::User);
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::AlreadyExists(PrincipalKind::Admin).to_string(),
            "Admin already exists"
        );
        assert_eq!(
            AuthError::PrincipalNotFound(PrincipalKind::User).to_string(),
            "User not found"
        );
        assert_eq!(
            AuthError::NoToken.to_string(),
            "No authentication token provided"
        );
    }
}
