use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use cartaz_application::AdminDirectory;
use cartaz_core::{AppError, AppResult};
use cartaz_domain::{AdminUser, EmailAddress};

/// PostgreSQL-backed directory of administrator accounts.
#[derive(Clone)]
pub struct PostgresAdminDirectory {
    pool: PgPool,
}

impl PostgresAdminDirectory {
    /// Creates a directory with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    email: String,
    display_name: String,
    is_active: bool,
}

#[async_trait]
impl AdminDirectory for PostgresAdminDirectory {
    async fn find_admin(&self, email: &EmailAddress) -> AppResult<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT email, display_name, is_active
            FROM admin_users
            WHERE lower(email) = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load admin user: {error}")))?;

        row.map(|row| {
            AdminUser::new(row.email, row.display_name, row.is_active).map_err(|error| {
                AppError::Internal(format!("admin user row failed validation: {error}"))
            })
        })
        .transpose()
    }
}
