use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cartaz_application::AuditLogRepository;
use cartaz_core::AppResult;
use cartaz_domain::AuditEntry;

/// In-memory change log for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryAuditLogRepository {
    entries: RwLock<HashMap<(String, String), Vec<AuditEntry>>>,
}

impl InMemoryAuditLogRepository {
    /// Creates an empty in-memory change log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Appends an entry to one record's history.
    pub async fn append(&self, table: &str, record_id: &str, entry: AuditEntry) {
        self.entries
            .write()
            .await
            .entry((table.to_owned(), record_id.to_owned()))
            .or_default()
            .push(entry);
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn list_entries(
        &self,
        table: &str,
        record_id: &str,
        limit: usize,
    ) -> AppResult<Vec<AuditEntry>> {
        let entries = self.entries.read().await;

        let mut history = entries
            .get(&(table.to_owned(), record_id.to_owned()))
            .cloned()
            .unwrap_or_default();
        history.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        history.truncate(limit.clamp(1, 200));

        Ok(history)
    }
}
