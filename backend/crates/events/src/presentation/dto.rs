//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Event;
use crate::domain::repository::DashboardStats;
use crate::domain::value_objects::Pagination;

/// Event creation request. Fields are optional so missing ones map to
/// the domain's error messages instead of a generic 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_free_event: bool,
    pub price: Option<f64>,
    #[serde(rename = "eventThumbnailImage")]
    pub thumbnail_url: Option<String>,
}

/// Listing query string
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(default)]
    pub show_past: bool,
    pub is_free: Option<bool>,
    pub search: Option<String>,
}

/// Recent-events query string
#[derive(Debug, Default, Deserialize)]
pub struct RecentEventsQuery {
    pub limit: Option<u32>,
}

/// Full event body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub id: Uuid,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_time: String,
    pub location: String,
    pub description: String,
    pub email: String,
    pub is_free_event: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "eventThumbnailImage")]
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventBody {
    fn from(e: &Event) -> Self {
        Self {
            id: *e.event_id.as_uuid(),
            event_name: e.event_name.clone(),
            event_date: e.event_date,
            event_time: e.event_time.clone(),
            location: e.location.clone(),
            description: e.description.clone(),
            email: e.email.clone(),
            is_free_event: e.is_free_event,
            price: e.price,
            thumbnail_url: e.thumbnail_url.clone(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Trimmed projection for the dashboard's recent-events panel
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEventBody {
    pub id: Uuid,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_time: String,
    pub location: String,
    pub is_free_event: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "eventThumbnailImage")]
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for RecentEventBody {
    fn from(e: &Event) -> Self {
        Self {
            id: *e.event_id.as_uuid(),
            event_name: e.event_name.clone(),
            event_date: e.event_date,
            event_time: e.event_time.clone(),
            location: e.location.clone(),
            is_free_event: e.is_free_event,
            price: e.price,
            thumbnail_url: e.thumbnail_url.clone(),
            created_at: e.created_at,
        }
    }
}

/// Single-event response envelope
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub success: bool,
    pub message: String,
    pub data: EventBody,
}

/// Listing response envelope
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub success: bool,
    pub message: String,
    pub data: EventListData,
}

#[derive(Debug, Serialize)]
pub struct EventListData {
    pub events: Vec<EventBody>,
    pub pagination: Pagination,
}

/// Message-only response envelope
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Dashboard stats response envelope
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: StatsBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBody {
    pub total_events: u64,
    pub total_users: u64,
    pub free_events: u64,
    pub paid_events: u64,
    pub events_this_month: u64,
}

impl From<DashboardStats> for StatsBody {
    fn from(s: DashboardStats) -> Self {
        Self {
            total_events: s.total_events,
            total_users: s.total_users,
            free_events: s.free_events,
            paid_events: s.paid_events,
            events_this_month: s.events_this_month,
        }
    }
}

/// Recent-events response envelope
#[derive(Debug, Serialize)]
pub struct RecentEventsResponse {
    pub success: bool,
    pub data: RecentEventsData,
}

#[derive(Debug, Serialize)]
pub struct RecentEventsData {
    pub events: Vec<RecentEventBody>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewEvent;
    use chrono::Duration;

    fn sample_event(is_free: bool) -> Event {
        NewEvent::validate(
            "Open Campus",
            Utc::now() + Duration::days(7),
            "10:00",
            "Main Hall",
            "Tour",
            "a@x.com",
            is_free,
            (!is_free).then_some(12.5),
            "https://cdn.example.com/a.png",
        )
        .unwrap()
        .into_event()
    }

    #[test]
    fn test_event_body_field_names() {
        let json = serde_json::to_value(EventBody::from(&sample_event(false))).unwrap();
        assert!(json.get("eventName").is_some());
        assert!(json.get("eventThumbnailImage").is_some());
        assert!(json.get("isFreeEvent").is_some());
        assert_eq!(json["price"], 12.5);
    }

    #[test]
    fn test_free_event_omits_price() {
        let json = serde_json::to_value(EventBody::from(&sample_event(true))).unwrap();
        assert!(json.get("price").is_none());
    }

    #[test]
    fn test_recent_body_is_trimmed() {
        let json = serde_json::to_value(RecentEventBody::from(&sample_event(true))).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("email").is_none());
        assert!(json.get("eventName").is_some());
    }

    #[test]
    fn test_list_query_parsing() {
        let q: ListEventsQuery =
            serde_urlencoded::from_str("page=2&limit=5&showPast=true&isFree=false&search=hall")
                .unwrap();
        assert_eq!(q.page, Some(2));
        assert!(q.show_past);
        assert_eq!(q.is_free, Some(false));
        assert_eq!(q.search.as_deref(), Some("hall"));
    }
}
