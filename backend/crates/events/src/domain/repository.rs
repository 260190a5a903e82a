//! Event Repository Trait

use kernel::id::EventId;

use crate::domain::entities::Event;
use crate::domain::value_objects::{EventFilter, Page};
use crate::error::EventResult;

/// Counters shown on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_events: u64,
    pub total_users: u64,
    pub free_events: u64,
    pub paid_events: u64,
    /// Events created since the first day of the current month
    pub events_this_month: u64,
}

#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    /// Persist a new event
    async fn insert(&self, event: &Event) -> EventResult<()>;

    /// List events matching the filter, sorted by date then time,
    /// together with the total match count for pagination
    async fn list(&self, filter: &EventFilter, page: Page) -> EventResult<(Vec<Event>, u64)>;

    /// Load one event by id
    async fn find_by_id(&self, id: EventId) -> EventResult<Option<Event>>;

    /// Delete one event; returns false when it did not exist
    async fn delete(&self, id: EventId) -> EventResult<bool>;

    /// Dashboard counters
    async fn stats(&self) -> EventResult<DashboardStats>;

    /// Newest events by creation time
    async fn recent(&self, limit: u32) -> EventResult<Vec<Event>>;
}
