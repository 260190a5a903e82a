//! Get Event Use Case

use std::sync::Arc;

use kernel::id::EventId;

use crate::domain::entities::Event;
use crate::domain::repository::EventRepository;
use crate::error::{EventError, EventResult};

pub struct GetEventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> GetEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: EventId) -> EventResult<Event> {
        self.repo.find_by_id(id).await?.ok_or(EventError::NotFound)
    }
}
