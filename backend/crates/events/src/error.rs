//! Event Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Event-specific result type alias
pub type EventResult<T> = Result<T, EventError>;

/// Event-specific error variants
#[derive(Debug, Error)]
pub enum EventError {
    #[error("All required fields must be provided")]
    MissingFields,

    #[error("Event thumbnail image is required")]
    MissingThumbnail,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("Price is required for paid events and must be greater than 0")]
    InvalidPrice,

    #[error("Event date cannot be in the past")]
    PastDate,

    #[error("Invalid event date")]
    InvalidDate,

    #[error("Invalid event ID")]
    InvalidId,

    #[error("Event not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl EventError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EventError::MissingFields
            | EventError::MissingThumbnail
            | EventError::InvalidEmail
            | EventError::InvalidPrice
            | EventError::PastDate
            | EventError::InvalidDate
            | EventError::InvalidId => StatusCode::BAD_REQUEST,
            EventError::NotFound => StatusCode::NOT_FOUND,
            EventError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EventError::NotFound => ErrorKind::NotFound,
            EventError::Database(_) => ErrorKind::InternalServerError,
            _ => ErrorKind::BadRequest,
        }
    }

    fn log(&self) {
        match self {
            EventError::Database(e) => {
                tracing::error!(error = %e, "Event database error");
            }
            _ => {
                tracing::debug!(error = %self, "Event error");
            }
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        self.log();

        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });

        (self.status_code(), Json(body)).into_response()
    }
}
