use std::sync::Arc;

use async_trait::async_trait;

use cartaz_core::{AppError, AppResult};
use cartaz_domain::AuditEntry;

/// Default page size for record history reads.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Repository port for reading the record change log.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Lists the newest entries for one tracked record, newest first.
    async fn list_entries(
        &self,
        table: &str,
        record_id: &str,
        limit: usize,
    ) -> AppResult<Vec<AuditEntry>>;
}

/// Application service reading record change history.
#[derive(Clone)]
pub struct AuditTrailService {
    repository: Arc<dyn AuditLogRepository>,
}

impl AuditTrailService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn AuditLogRepository>) -> Self {
        Self { repository }
    }

    /// Fetches up to `limit` history entries for `(table, record_id)`.
    ///
    /// Blank identifiers come from records that were never saved, so
    /// they short-circuit with a validation error before the repository
    /// is touched.
    pub async fn fetch_history(
        &self,
        table: &str,
        record_id: &str,
        limit: usize,
    ) -> AppResult<Vec<AuditEntry>> {
        if table.trim().is_empty() {
            return Err(AppError::Validation(
                "audit history requires a table name".to_owned(),
            ));
        }

        if record_id.trim().is_empty() {
            return Err(AppError::Validation(
                "audit history requires a record id".to_owned(),
            ));
        }

        self.repository.list_entries(table, record_id, limit).await
    }
}
