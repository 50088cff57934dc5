use std::sync::Arc;

use async_trait::async_trait;

use cartaz_core::{AdminIdentity, AppError, AppResult};
use cartaz_domain::{AdminUser, EmailAddress};

/// Directory port resolving administrator accounts.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    /// Finds an administrator by normalized email.
    async fn find_admin(&self, email: &EmailAddress) -> AppResult<Option<AdminUser>>;
}

/// Application service gating the administrative surface.
#[derive(Clone)]
pub struct AccessService {
    directory: Arc<dyn AdminDirectory>,
}

impl AccessService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(directory: Arc<dyn AdminDirectory>) -> Self {
        Self { directory }
    }

    /// Resolves the acting administrator or rejects the request.
    ///
    /// A missing or malformed email is an authentication failure;
    /// unknown and deactivated accounts are rejected with `Forbidden`.
    pub async fn require_admin(&self, email: &str) -> AppResult<AdminIdentity> {
        let email = EmailAddress::new(email)
            .map_err(|_| AppError::Unauthorized("a valid admin email is required".to_owned()))?;

        let admin = self.directory.find_admin(&email).await?.ok_or_else(|| {
            AppError::Forbidden(format!("'{}' is not an administrator", email.as_str()))
        })?;

        if !admin.is_active() {
            return Err(AppError::Forbidden(format!(
                "administrator '{}' is deactivated",
                email.as_str()
            )));
        }

        Ok(AdminIdentity::new(
            admin.email().as_str(),
            admin.display_name().as_str(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use cartaz_core::{AppError, AppResult};
    use cartaz_domain::{AdminUser, EmailAddress};

    use super::{AccessService, AdminDirectory};

    #[derive(Default)]
    struct FakeAdminDirectory {
        admins: Vec<AdminUser>,
    }

    #[async_trait]
    impl AdminDirectory for FakeAdminDirectory {
        async fn find_admin(&self, email: &EmailAddress) -> AppResult<Option<AdminUser>> {
            Ok(self
                .admins
                .iter()
                .find(|admin| admin.email() == email)
                .cloned())
        }
    }

    fn directory_with(admins: Vec<AdminUser>) -> AccessService {
        AccessService::new(Arc::new(FakeAdminDirectory { admins }))
    }

    fn admin(email: &str, is_active: bool) -> AdminUser {
        AdminUser::new(email, "Ana Lima", is_active).unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn active_admin_resolves_identity() {
        let service = directory_with(vec![admin("ana@cartaz.app", true)]);

        let identity = service
            .require_admin("  Ana@Cartaz.App ")
            .await
            .unwrap_or_else(|_| unreachable!());

        assert_eq!(identity.email(), "ana@cartaz.app");
        assert_eq!(identity.display_name(), "Ana Lima");
    }

    #[tokio::test]
    async fn unknown_email_is_forbidden() {
        let service = directory_with(Vec::new());

        let result = service.require_admin("bruno@cartaz.app").await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn deactivated_admin_is_forbidden() {
        let service = directory_with(vec![admin("ana@cartaz.app", false)]);

        let result = service.require_admin("ana@cartaz.app").await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn malformed_email_is_unauthorized() {
        let service = directory_with(Vec::new());

        let result = service.require_admin("not-an-email").await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
