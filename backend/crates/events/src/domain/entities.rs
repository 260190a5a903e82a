//! Event Entity

use chrono::{DateTime, Utc};
use kernel::id::EventId;

use crate::error::{EventError, EventResult};

/// A listed event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_id: EventId,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    /// Display string like "18:30" or "6:30 PM"; not parsed, only sorted
    pub event_time: String,
    pub location: String,
    pub description: String,
    /// Contact email, lowercased at creation
    pub email: String,
    pub is_free_event: bool,
    /// Present iff the event is paid
    pub price: Option<f64>,
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating an event
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_time: String,
    pub location: String,
    pub description: String,
    pub email: String,
    pub is_free_event: bool,
    pub price: Option<f64>,
    pub thumbnail_url: String,
}

impl NewEvent {
    /// Validate and normalize the raw input.
    ///
    /// Validation order mirrors the API contract: required fields,
    /// thumbnail, email format, price rule, then the past-date check.
    pub fn validate(
        event_name: &str,
        event_date: DateTime<Utc>,
        event_time: &str,
        location: &str,
        description: &str,
        email: &str,
        is_free_event: bool,
        price: Option<f64>,
        thumbnail_url: &str,
    ) -> EventResult<Self> {
        let event_name = event_name.trim();
        let event_time = event_time.trim();
        let location = location.trim();
        let description = description.trim();
        let email = email.trim().to_lowercase();
        let thumbnail_url = thumbnail_url.trim();

        if event_name.is_empty()
            || event_time.is_empty()
            || location.is_empty()
            || description.is_empty()
            || email.is_empty()
        {
            return Err(EventError::MissingFields);
        }

        if thumbnail_url.is_empty() {
            return Err(EventError::MissingThumbnail);
        }

        if !is_valid_email(&email) {
            return Err(EventError::InvalidEmail);
        }

        let price = if is_free_event {
            // Free events never carry a price, even if one was sent
            None
        } else {
            match price {
                Some(p) if p > 0.0 => Some(p),
                _ => return Err(EventError::InvalidPrice),
            }
        };

        // Reject dates before the start of today (UTC)
        let today = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc());
        if let Some(today) = today {
            if event_date < today {
                return Err(EventError::PastDate);
            }
        }

        Ok(Self {
            event_name: event_name.to_string(),
            event_date,
            event_time: event_time.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            email,
            is_free_event,
            price,
            thumbnail_url: thumbnail_url.to_string(),
        })
    }

    /// Promote to a stored entity with a fresh id and timestamps
    pub fn into_event(self) -> Event {
        let now = Utc::now();
        Event {
            event_id: EventId::new(),
            event_name: self.event_name,
            event_date: self.event_date,
            event_time: self.event_time,
            location: self.location,
            description: self.description,
            email: self.email,
            is_free_event: self.is_free_event,
            price: self.price,
            thumbnail_url: self.thumbnail_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Permissive contact-email check: no whitespace, one `@`, a dot
/// somewhere in the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid(is_free: bool, price: Option<f64>) -> EventResult<NewEvent> {
        NewEvent::validate(
            "Open Campus",
            Utc::now() + Duration::days(7),
            "10:00",
            "Main Hall",
            "Campus tour and demos",
            "Events@Uni.Example.com",
            is_free,
            price,
            "https://cdn.example.com/open-campus.png",
        )
    }

    #[test]
    fn test_valid_free_event_drops_price() {
        let event = valid(true, Some(5.0)).unwrap();
        assert!(event.price.is_none());
        assert_eq!(event.email, "events@uni.example.com");
    }

    #[test]
    fn test_paid_event_requires_positive_price() {
        assert!(matches!(valid(false, None), Err(EventError::InvalidPrice)));
        assert!(matches!(
            valid(false, Some(0.0)),
            Err(EventError::InvalidPrice)
        ));
        assert!(valid(false, Some(12.5)).is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let err = NewEvent::validate(
            "  ",
            Utc::now() + Duration::days(1),
            "10:00",
            "Hall",
            "Desc",
            "a@x.com",
            true,
            None,
            "https://x/y.png",
        )
        .unwrap_err();
        assert!(matches!(err, EventError::MissingFields));
    }

    #[test]
    fn test_missing_thumbnail() {
        let err = NewEvent::validate(
            "Fair",
            Utc::now() + Duration::days(1),
            "10:00",
            "Hall",
            "Desc",
            "a@x.com",
            true,
            None,
            "  ",
        )
        .unwrap_err();
        assert!(matches!(err, EventError::MissingThumbnail));
    }

    #[test]
    fn test_past_date_rejected() {
        let err = NewEvent::validate(
            "Fair",
            Utc::now() - Duration::days(2),
            "10:00",
            "Hall",
            "Desc",
            "a@x.com",
            true,
            None,
            "https://x/y.png",
        )
        .unwrap_err();
        assert!(matches!(err, EventError::PastDate));
    }

    #[test]
    fn test_invalid_email() {
        let err = NewEvent::validate(
            "Fair",
            Utc::now() + Duration::days(1),
            "10:00",
            "Hall",
            "Desc",
            "not-an-email",
            true,
            None,
            "https://x/y.png",
        )
        .unwrap_err();
        assert!(matches!(err, EventError::InvalidEmail));
    }
}
