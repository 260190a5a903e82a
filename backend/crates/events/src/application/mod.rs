pub mod create_event;
pub mod dashboard;
pub mod delete_event;
pub mod get_event;
pub mod list_events;

pub use create_event::{CreateEventInput, CreateEventUseCase};
pub use dashboard::DashboardUseCase;
pub use delete_event::DeleteEventUseCase;
pub use get_event::GetEventUseCase;
pub use list_events::ListEventsUseCase;
