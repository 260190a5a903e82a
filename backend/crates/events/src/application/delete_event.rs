//! Delete Event Use Case

use std::sync::Arc;

use kernel::id::EventId;

use crate::domain::repository::EventRepository;
use crate::error::{EventError, EventResult};

pub struct DeleteEventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: EventId) -> EventResult<()> {
        if !self.repo.delete(id).await? {
            return Err(EventError::NotFound);
        }

        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
