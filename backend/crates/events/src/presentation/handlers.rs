//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::EventId;
use std::sync::Arc;

use crate::application::{
    CreateEventInput, CreateEventUseCase, DashboardUseCase, DeleteEventUseCase, GetEventUseCase,
    ListEventsUseCase,
};
use crate::domain::repository::EventRepository;
use crate::domain::value_objects::{EventFilter, Page};
use crate::error::{EventError, EventResult};
use crate::presentation::dto::{
    CreateEventRequest, EventBody, EventListData, EventListResponse, EventResponse,
    ListEventsQuery, MessageResponse, RecentEventBody, RecentEventsData, RecentEventsQuery,
    RecentEventsResponse, StatsResponse,
};

/// Shared state for event handlers
#[derive(Clone)]
pub struct EventAppState<R>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> EventAppState<R>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// POST /api/events
pub async fn create_event<R>(
    State(state): State<EventAppState<R>>,
    Json(req): Json<CreateEventRequest>,
) -> EventResult<impl IntoResponse>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    let input = CreateEventInput {
        event_name: req.event_name.ok_or(EventError::MissingFields)?,
        event_date: req.event_date.ok_or(EventError::MissingFields)?,
        event_time: req.event_time.ok_or(EventError::MissingFields)?,
        location: req.location.ok_or(EventError::MissingFields)?,
        description: req.description.ok_or(EventError::MissingFields)?,
        email: req.email.ok_or(EventError::MissingFields)?,
        is_free_event: req.is_free_event,
        price: req.price,
        thumbnail_url: req.thumbnail_url.ok_or(EventError::MissingThumbnail)?,
    };

    let event = CreateEventUseCase::new(state.repo.clone())
        .execute(input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            success: true,
            message: "Event created successfully".to_string(),
            data: EventBody::from(&event),
        }),
    ))
}

/// GET /api/events
pub async fn list_events<R>(
    State(state): State<EventAppState<R>>,
    Query(query): Query<ListEventsQuery>,
) -> EventResult<Json<EventListResponse>>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    let filter = EventFilter {
        show_past: query.show_past,
        is_free: query.is_free,
        search: query.search,
    };
    let page = Page::new(query.page, query.limit);

    let (events, pagination) = ListEventsUseCase::new(state.repo.clone())
        .execute(filter, page)
        .await?;

    Ok(Json(EventListResponse {
        success: true,
        message: "Events fetched successfully".to_string(),
        data: EventListData {
            events: events.iter().map(EventBody::from).collect(),
            pagination,
        },
    }))
}

/// GET /api/events/{id}
pub async fn get_event<R>(
    State(state): State<EventAppState<R>>,
    Path(id): Path<String>,
) -> EventResult<Json<EventResponse>>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    let id = parse_event_id(&id)?;

    let event = GetEventUseCase::new(state.repo.clone()).execute(id).await?;

    Ok(Json(EventResponse {
        success: true,
        message: "Event fetched successfully".to_string(),
        data: EventBody::from(&event),
    }))
}

/// DELETE /api/events/{id} (admin-guarded)
pub async fn delete_event<R>(
    State(state): State<EventAppState<R>>,
    Path(id): Path<String>,
) -> EventResult<Json<MessageResponse>>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    let id = parse_event_id(&id)?;

    DeleteEventUseCase::new(state.repo.clone()).execute(id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Event deleted successfully".to_string(),
    }))
}

/// GET /api/admin/dashboard-stats (admin-guarded)
pub async fn dashboard_stats<R>(
    State(state): State<EventAppState<R>>,
) -> EventResult<Json<StatsResponse>>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    let stats = DashboardUseCase::new(state.repo.clone()).stats().await?;

    Ok(Json(StatsResponse {
        success: true,
        data: stats.into(),
    }))
}

/// GET /api/admin/recent-events (admin-guarded)
pub async fn recent_events<R>(
    State(state): State<EventAppState<R>>,
    Query(query): Query<RecentEventsQuery>,
) -> EventResult<Json<RecentEventsResponse>>
where
    R: EventRepository + Clone + Send + Sync + 'static,
{
    let events = DashboardUseCase::new(state.repo.clone())
        .recent_events(query.limit)
        .await?;

    Ok(Json(RecentEventsResponse {
        success: true,
        data: RecentEventsData {
            events: events.iter().map(RecentEventBody::from).collect(),
        },
    }))
}

/// A malformed id is a client error, not a missing event
fn parse_event_id(raw: &str) -> EventResult<EventId> {
    EventId::parse_str(raw).map_err(|_| EventError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_id() {
        assert!(parse_event_id("b5f6d3a0-0000-4000-8000-000000000000").is_ok());
        assert!(matches!(
            parse_event_id("not-a-uuid"),
            Err(EventError::InvalidId)
        ));
    }
}
