//! List Events Use Case

use std::sync::Arc;

use crate::domain::entities::Event;
use crate::domain::repository::EventRepository;
use crate::domain::value_objects::{EventFilter, Page, Pagination};
use crate::error::EventResult;

pub struct ListEventsUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> ListEventsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        filter: EventFilter,
        page: Page,
    ) -> EventResult<(Vec<Event>, Pagination)> {
        let (events, total) = self.repo.list(&filter, page).await?;
        Ok((events, Pagination::compute(page, total)))
    }
}
