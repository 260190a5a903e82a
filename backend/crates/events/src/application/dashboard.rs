//! Admin Dashboard Use Case

use std::sync::Arc;

use crate::domain::entities::Event;
use crate::domain::repository::{DashboardStats, EventRepository};
use crate::error::EventResult;

/// Default size of the recent-events panel
pub const DEFAULT_RECENT_LIMIT: u32 = 5;

pub struct DashboardUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> DashboardUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn stats(&self) -> EventResult<DashboardStats> {
        self.repo.stats().await
    }

    pub async fn recent_events(&self, limit: Option<u32>) -> EventResult<Vec<Event>> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT).max(1);
        self.repo.recent(limit).await
    }
}
