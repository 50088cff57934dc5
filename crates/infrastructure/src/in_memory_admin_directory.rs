use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cartaz_application::AdminDirectory;
use cartaz_core::AppResult;
use cartaz_domain::{AdminUser, EmailAddress};

/// In-memory administrator directory for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryAdminDirectory {
    admins: RwLock<HashMap<EmailAddress, AdminUser>>,
}

impl InMemoryAdminDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            admins: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or replaces an administrator entry.
    pub async fn upsert(&self, admin: AdminUser) {
        self.admins
            .write()
            .await
            .insert(admin.email().clone(), admin);
    }
}

#[async_trait]
impl AdminDirectory for InMemoryAdminDirectory {
    async fn find_admin(&self, email: &EmailAddress) -> AppResult<Option<AdminUser>> {
        Ok(self.admins.read().await.get(email).cloned())
    }
}
