use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use cartaz_application::ContentRepository;
use cartaz_core::{AppError, AppResult};
use cartaz_domain::{EventRecord, PublicationStatus, VenueRecord};

/// PostgreSQL-backed repository for scored content snapshots.
#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    id: Uuid,
    title: Option<String>,
    summary: Option<String>,
    starts_at: Option<DateTime<Utc>>,
    venue_id: Option<Uuid>,
    organizer_id: Option<Uuid>,
    cover_image_url: Option<String>,
    tags: Option<Vec<String>>,
    status: Option<String>,
}

#[derive(Debug, FromRow)]
struct VenueRow {
    id: Uuid,
    name: Option<String>,
    description: Option<String>,
    address: Option<String>,
    city: Option<String>,
    cover_image_url: Option<String>,
    contact_info: Option<String>,
    status: Option<String>,
}

/// Maps a stored status value onto the publication enum.
///
/// Unknown values count as drafts, so a bad row can lower the score but
/// never break the report.
fn status_from_storage(record_id: Uuid, raw: Option<String>) -> PublicationStatus {
    match raw {
        None => PublicationStatus::Draft,
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(
                %record_id,
                status = value.as_str(),
                "unknown publication status, counting record as draft"
            );
            PublicationStatus::Draft
        }),
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn list_events(&self) -> AppResult<Vec<EventRecord>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, summary, starts_at, venue_id, organizer_id, cover_image_url, tags, status
            FROM events
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list events: {error}")))?;

        Ok(rows
            .into_iter()
            .map(|row| EventRecord {
                id: row.id,
                title: row.title,
                summary: row.summary,
                starts_at: row.starts_at,
                venue_id: row.venue_id,
                organizer_id: row.organizer_id,
                cover_image_url: row.cover_image_url,
                tags: row.tags.unwrap_or_default(),
                status: status_from_storage(row.id, row.status),
            })
            .collect())
    }

    async fn list_venues(&self) -> AppResult<Vec<VenueRecord>> {
        let rows = sqlx::query_as::<_, VenueRow>(
            r#"
            SELECT id, name, description, address, city, cover_image_url, contact_info, status
            FROM venues
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list venues: {error}")))?;

        Ok(rows
            .into_iter()
            .map(|row| VenueRecord {
                id: row.id,
                name: row.name,
                description: row.description,
                address: row.address,
                city: row.city,
                cover_image_url: row.cover_image_url,
                contact_info: row.contact_info,
                status: status_from_storage(row.id, row.status),
            })
            .collect())
    }
}
