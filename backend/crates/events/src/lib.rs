//! Events Backend Module
//!
//! Event listings plus the admin dashboard built on top of them.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, filters, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Public event listing with pagination, upcoming-only default,
//!   free/paid filter and name/location search
//! - Event creation with field, email, price and date validation
//! - Admin-guarded deletion and dashboard (stats, recent events)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::entities::Event;
pub use domain::repository::{DashboardStats, EventRepository};
pub use domain::value_objects::{EventFilter, Page, Pagination};
pub use error::{EventError, EventResult};
pub use infra::postgres::PgEventRepository;
pub use presentation::handlers::EventAppState;
pub use presentation::router::{admin_router_generic, events_router_generic};
