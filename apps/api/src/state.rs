use cartaz_application::{AccessService, AuditTrailService, QualityService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub quality_service: QualityService,
    pub audit_trail_service: AuditTrailService,
    pub access_service: AccessService,
    pub postgres_pool: PgPool,
    pub admin_api_token: String,
}
