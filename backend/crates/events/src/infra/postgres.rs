//! PostgreSQL Repository Implementation

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use kernel::id::EventId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Event;
use crate::domain::repository::{DashboardStats, EventRepository};
use crate::domain::value_objects::{EventFilter, Page};
use crate::error::EventResult;

/// PostgreSQL-backed event repository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const EVENT_COLUMNS: &str = "id, event_name, event_date, event_time, location, \
     description, email, is_free_event, price, thumbnail_url, created_at, updated_at";

/// Shared filter clause; NULL binds disable a condition.
const LIST_WHERE: &str = "($1 OR event_date >= NOW()) \
     AND ($2::BOOLEAN IS NULL OR is_free_event = $2) \
     AND ($3::TEXT IS NULL OR event_name ILIKE $3 OR location ILIKE $3)";

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    event_name: String,
    event_date: DateTime<Utc>,
    event_time: String,
    location: String,
    description: String,
    email: String,
    is_free_event: bool,
    price: Option<f64>,
    thumbnail_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            event_id: EventId::from_uuid(self.id),
            event_name: self.event_name,
            event_date: self.event_date,
            event_time: self.event_time,
            location: self.location,
            description: self.description,
            email: self.email,
            is_free_event: self.is_free_event,
            price: self.price,
            thumbnail_url: self.thumbnail_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total_events: i64,
    free_events: i64,
    paid_events: i64,
    events_this_month: i64,
}

impl EventRepository for PgEventRepository {
    async fn insert(&self, event: &Event) -> EventResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, event_name, event_date, event_time, location,
                description, email, is_free_event, price, thumbnail_url,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.event_name)
        .bind(event.event_date)
        .bind(&event.event_time)
        .bind(&event.location)
        .bind(&event.description)
        .bind(&event.email)
        .bind(event.is_free_event)
        .bind(event.price)
        .bind(&event.thumbnail_url)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, filter: &EventFilter, page: Page) -> EventResult<(Vec<Event>, u64)> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));

        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE {LIST_WHERE} \
             ORDER BY event_date ASC, event_time ASC LIMIT $4 OFFSET $5"
        );

        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(filter.show_past)
            .bind(filter.is_free)
            .bind(pattern.as_deref())
            .bind(page.limit as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM events WHERE {LIST_WHERE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(filter.show_past)
            .bind(filter.is_free)
            .bind(pattern.as_deref())
            .fetch_one(&self.pool)
            .await?;

        Ok((
            rows.into_iter().map(EventRow::into_event).collect(),
            total as u64,
        ))
    }

    async fn find_by_id(&self, id: EventId) -> EventResult<Option<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");

        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(EventRow::into_event))
    }

    async fn delete(&self, id: EventId) -> EventResult<bool> {
        let deleted = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn stats(&self) -> EventResult<DashboardStats> {
        let now = Utc::now();
        // The first of the current month always exists
        let month_start = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|t| t.and_utc())
            .unwrap_or(now);

        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_events,
                COUNT(*) FILTER (WHERE is_free_event) AS free_events,
                COUNT(*) FILTER (WHERE NOT is_free_event) AS paid_events,
                COUNT(*) FILTER (WHERE created_at >= $1) AS events_this_month
            FROM events
            "#,
        )
        .bind(month_start)
        .fetch_one(&self.pool)
        .await?;

        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(DashboardStats {
            total_events: row.total_events as u64,
            total_users: total_users as u64,
            free_events: row.free_events as u64,
            paid_events: row.paid_events as u64,
            events_this_month: row.events_this_month as u64,
        })
    }

    async fn recent(&self, limit: u32) -> EventResult<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at DESC LIMIT $1"
        );

        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }
}
