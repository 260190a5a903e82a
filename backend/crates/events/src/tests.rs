//! Crate-level tests for the events flows
//!
//! An in-memory repository backs the use cases so filtering, pagination
//! and the dashboard counters run without a database.

use std::sync::{Arc, Mutex};

use chrono::{Datelike, Duration, NaiveDate, Utc};
use kernel::id::EventId;

use crate::application::{
    CreateEventInput, CreateEventUseCase, DashboardUseCase, DeleteEventUseCase, GetEventUseCase,
    ListEventsUseCase,
};
use crate::domain::entities::{Event, NewEvent};
use crate::domain::repository::{DashboardStats, EventRepository};
use crate::domain::value_objects::{EventFilter, Page};
use crate::error::{EventError, EventResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemoryEventRepository {
    events: Arc<Mutex<Vec<Event>>>,
    user_count: Arc<Mutex<u64>>,
}

impl MemoryEventRepository {
    fn matches(event: &Event, filter: &EventFilter, now: chrono::DateTime<Utc>) -> bool {
        if !filter.show_past && event.event_date < now {
            return false;
        }
        if let Some(is_free) = filter.is_free {
            if event.is_free_event != is_free {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !event.event_name.to_lowercase().contains(&needle)
                && !event.location.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

impl EventRepository for MemoryEventRepository {
    async fn insert(&self, event: &Event) -> EventResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn list(&self, filter: &EventFilter, page: Page) -> EventResult<(Vec<Event>, u64)> {
        let now = Utc::now();
        let mut matched: Vec<Event> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| Self::matches(e, filter, now))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.event_date
                .cmp(&b.event_date)
                .then_with(|| a.event_time.cmp(&b.event_time))
        });

        let total = matched.len() as u64;
        let events = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();
        Ok((events, total))
    }

    async fn find_by_id(&self, id: EventId) -> EventResult<Option<Event>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.event_id == id)
            .cloned())
    }

    async fn delete(&self, id: EventId) -> EventResult<bool> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.event_id != id);
        Ok(events.len() < before)
    }

    async fn stats(&self) -> EventResult<DashboardStats> {
        let now = Utc::now();
        let month_start = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|t| t.and_utc())
            .unwrap_or(now);

        let events = self.events.lock().unwrap();
        Ok(DashboardStats {
            total_events: events.len() as u64,
            total_users: *self.user_count.lock().unwrap(),
            free_events: events.iter().filter(|e| e.is_free_event).count() as u64,
            paid_events: events.iter().filter(|e| !e.is_free_event).count() as u64,
            events_this_month: events
                .iter()
                .filter(|e| e.created_at >= month_start)
                .count() as u64,
        })
    }

    async fn recent(&self, limit: u32) -> EventResult<Vec<Event>> {
        let mut events = self.events.lock().unwrap().clone();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events.truncate(limit as usize);
        Ok(events)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn event(name: &str, location: &str, days_ahead: i64, is_free: bool) -> Event {
    let mut e = NewEvent::validate(
        name,
        Utc::now() + Duration::days(days_ahead.max(1)),
        "10:00",
        location,
        "Description",
        "contact@uni.example.com",
        is_free,
        (!is_free).then_some(20.0),
        "https://cdn.example.com/thumb.png",
    )
    .unwrap()
    .into_event();
    // validate() rejects past dates, so backdate after the fact
    e.event_date = Utc::now() + Duration::days(days_ahead);
    e
}

async fn seeded_repo() -> Arc<MemoryEventRepository> {
    let repo = Arc::new(MemoryEventRepository::default());
    for e in [
        event("Open Campus", "Main Hall", 3, true),
        event("Hackathon", "Lab 2", 10, false),
        event("Old Lecture", "Main Hall", -5, true),
    ] {
        repo.insert(&e).await.unwrap();
    }
    repo
}

// ============================================================================
// Listing
// ============================================================================

#[cfg(test)]
mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_upcoming_only_by_default() {
        let repo = seeded_repo().await;
        let (events, pagination) = ListEventsUseCase::new(repo)
            .execute(EventFilter::default(), Page::default())
            .await
            .unwrap();

        assert_eq!(pagination.total_events, 2);
        assert!(events.iter().all(|e| e.event_date >= Utc::now()));
        // Sorted by date ascending
        assert_eq!(events[0].event_name, "Open Campus");
    }

    #[tokio::test]
    async fn test_show_past_includes_everything() {
        let repo = seeded_repo().await;
        let filter = EventFilter {
            show_past: true,
            ..Default::default()
        };
        let (_, pagination) = ListEventsUseCase::new(repo)
            .execute(filter, Page::default())
            .await
            .unwrap();
        assert_eq!(pagination.total_events, 3);
    }

    #[tokio::test]
    async fn test_free_filter_and_search() {
        let repo = seeded_repo().await;

        let filter = EventFilter {
            is_free: Some(false),
            ..Default::default()
        };
        let (events, _) = ListEventsUseCase::new(repo.clone())
            .execute(filter, Page::default())
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, "Hackathon");

        // Case-insensitive match over location
        let filter = EventFilter {
            search: Some("main".to_string()),
            ..Default::default()
        };
        let (events, _) = ListEventsUseCase::new(repo)
            .execute(filter, Page::default())
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].location, "Main Hall");
    }

    #[tokio::test]
    async fn test_pagination_block() {
        let repo = Arc::new(MemoryEventRepository::default());
        for i in 0..25 {
            repo.insert(&event(&format!("Event {i}"), "Hall", 5, true))
                .await
                .unwrap();
        }

        let (events, pagination) = ListEventsUseCase::new(repo)
            .execute(EventFilter::default(), Page::new(Some(2), Some(10)))
            .await
            .unwrap();

        assert_eq!(events.len(), 10);
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.total_events, 25);
        assert!(pagination.has_next_page);
        assert!(pagination.has_prev_page);
    }
}

// ============================================================================
// Create / get / delete
// ============================================================================

#[cfg(test)]
mod crud_tests {
    use super::*;

    fn create_input() -> CreateEventInput {
        CreateEventInput {
            event_name: "Job Fair".to_string(),
            event_date: (Utc::now() + Duration::days(14))
                .format("%Y-%m-%d")
                .to_string(),
            event_time: "09:00".to_string(),
            location: "Gym".to_string(),
            description: "Meet employers".to_string(),
            email: "Careers@Uni.Example.com".to_string(),
            is_free_event: true,
            price: None,
            thumbnail_url: "https://cdn.example.com/fair.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = Arc::new(MemoryEventRepository::default());
        let created = CreateEventUseCase::new(repo.clone())
            .execute(create_input())
            .await
            .unwrap();
        assert_eq!(created.email, "careers@uni.example.com");

        let fetched = GetEventUseCase::new(repo)
            .execute(created.event_id)
            .await
            .unwrap();
        assert_eq!(fetched.event_name, "Job Fair");
    }

    #[tokio::test]
    async fn test_create_rejects_past_date() {
        let repo = Arc::new(MemoryEventRepository::default());
        let mut input = create_input();
        input.event_date = "2020-01-01".to_string();

        let err = CreateEventUseCase::new(repo)
            .execute(input)
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::PastDate));
    }

    #[tokio::test]
    async fn test_get_unknown_event() {
        let repo = Arc::new(MemoryEventRepository::default());
        let err = GetEventUseCase::new(repo)
            .execute(EventId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::NotFound));
        assert_eq!(err.to_string(), "Event not found");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = seeded_repo().await;
        let id = repo.events.lock().unwrap()[0].event_id;

        let use_case = DeleteEventUseCase::new(repo);
        use_case.execute(id).await.unwrap();
        let err = use_case.execute(id).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound));
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[cfg(test)]
mod dashboard_tests {
    use super::*;

    #[tokio::test]
    async fn test_stats_counters() {
        let repo = seeded_repo().await;
        *repo.user_count.lock().unwrap() = 42;

        let stats = DashboardUseCase::new(repo).stats().await.unwrap();
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.total_users, 42);
        assert_eq!(stats.free_events, 2);
        assert_eq!(stats.paid_events, 1);
        // All were created just now, inside the current month
        assert_eq!(stats.events_this_month, 3);
    }

    #[tokio::test]
    async fn test_recent_events_limit_and_order() {
        let repo = Arc::new(MemoryEventRepository::default());
        for i in 0..8 {
            let mut e = event(&format!("Event {i}"), "Hall", 5, true);
            e.created_at = Utc::now() - Duration::minutes(8 - i);
            repo.insert(&e).await.unwrap();
        }

        let recent = DashboardUseCase::new(repo)
            .recent_events(None)
            .await
            .unwrap();
        assert_eq!(recent.len(), 5);
        // Newest first
        assert_eq!(recent[0].event_name, "Event 7");
    }
}
