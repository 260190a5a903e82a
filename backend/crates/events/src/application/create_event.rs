//! Create Event Use Case

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{Event, NewEvent};
use crate::domain::repository::EventRepository;
use crate::error::{EventError, EventResult};

/// Raw creation input as it arrives over the wire
pub struct CreateEventInput {
    pub event_name: String,
    /// RFC 3339 timestamp or a plain `YYYY-MM-DD` date
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub description: String,
    pub email: String,
    pub is_free_event: bool,
    pub price: Option<f64>,
    pub thumbnail_url: String,
}

pub struct CreateEventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> CreateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateEventInput) -> EventResult<Event> {
        let event_date = parse_event_date(&input.event_date)?;

        let new_event = NewEvent::validate(
            &input.event_name,
            event_date,
            &input.event_time,
            &input.location,
            &input.description,
            &input.email,
            input.is_free_event,
            input.price,
            &input.thumbnail_url,
        )?;

        let event = new_event.into_event();
        self.repo.insert(&event).await?;

        tracing::info!(event_id = %event.event_id, name = %event.event_name, "Event created");

        Ok(event)
    }
}

/// Accept either a full timestamp or a date-only value; a bare date
/// means midnight UTC of that day.
fn parse_event_date(raw: &str) -> EventResult<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EventError::MissingFields);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
        .ok_or(EventError::InvalidDate)
}
