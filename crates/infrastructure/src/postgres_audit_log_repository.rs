use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use cartaz_application::AuditLogRepository;
use cartaz_core::{AppError, AppResult};
use cartaz_domain::{AuditAction, AuditEntry};

/// PostgreSQL-backed repository for the record change log.
#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditRow {
    id: Uuid,
    admin_email: String,
    action: String,
    old_values: Option<Value>,
    new_values: Option<Value>,
    created_at: DateTime<Utc>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl AuditRow {
    fn into_entry(self) -> AppResult<AuditEntry> {
        let action = AuditAction::from_str(self.action.as_str()).map_err(|_| {
            AppError::Internal(format!(
                "audit entry '{}' carries unknown action '{}'",
                self.id, self.action
            ))
        })?;

        // Non-object snapshots are normalized away by the entry constructor.
        Ok(AuditEntry::new(
            self.id,
            self.admin_email,
            action,
            self.old_values.and_then(|value| value.as_object().cloned()),
            self.new_values.and_then(|value| value.as_object().cloned()),
            self.created_at,
            self.ip_address,
            self.user_agent,
        ))
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn list_entries(
        &self,
        table: &str,
        record_id: &str,
        limit: usize,
    ) -> AppResult<Vec<AuditEntry>> {
        let capped_limit = limit.clamp(1, 200) as i64;
        let rows = sqlx::query_as::<_, AuditRow>(
            r#"
            SELECT id, admin_email, action, old_values, new_values, created_at, ip_address, user_agent
            FROM record_audit_log
            WHERE table_name = $1 AND record_id = $2
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(table)
        .bind(record_id)
        .bind(capped_limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list audit entries: {error}")))?;

        rows.into_iter().map(AuditRow::into_entry).collect()
    }
}
