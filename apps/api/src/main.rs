//! Cartaz API composition root.

#![forbid(unsafe_code)]

mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use cartaz_application::{AccessService, AuditTrailService, QualityService};
use cartaz_core::AppError;
use cartaz_domain::QualityPolicy;
use cartaz_infrastructure::{
    PostgresAdminDirectory, PostgresAuditLogRepository, PostgresContentRepository,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

    let database_url = required_env("DATABASE_URL")?;
    let admin_api_token = required_env("ADMIN_API_TOKEN")?;
    let frontend_url =
        env::var("ADMIN_FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);

    let quality_policy = quality_policy_from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    if migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let content_repository = Arc::new(PostgresContentRepository::new(pool.clone()));
    let audit_log_repository = Arc::new(PostgresAuditLogRepository::new(pool.clone()));
    let admin_directory = Arc::new(PostgresAdminDirectory::new(pool.clone()));

    let app_state = AppState {
        quality_service: QualityService::new(content_repository, quality_policy),
        audit_trail_service: AuditTrailService::new(audit_log_repository),
        access_service: AccessService::new(admin_directory),
        postgres_pool: pool,
        admin_api_token,
    };

    let admin_routes = Router::new()
        .route(
            "/api/admin/quality/metrics",
            get(handlers::quality::quality_metrics_handler),
        )
        .route(
            "/api/admin/records/{table}/{record_id}/history",
            get(handlers::audit::record_history_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_admin,
        ));

    let cors_layer = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(&frontend_url).map_err(|error| {
            AppError::Internal(format!("invalid ADMIN_FRONTEND_URL: {error}"))
        })?)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state);

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "cartaz-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn quality_policy_from_env() -> Result<QualityPolicy, AppError> {
    let defaults = QualityPolicy::default();
    let complete_threshold = optional_f64_env("QUALITY_COMPLETE_THRESHOLD")?
        .unwrap_or_else(|| defaults.complete_threshold());
    let completeness_weight = optional_f64_env("QUALITY_COMPLETENESS_WEIGHT")?
        .unwrap_or_else(|| defaults.completeness_weight());
    let publish_weight =
        optional_f64_env("QUALITY_PUBLISH_WEIGHT")?.unwrap_or_else(|| defaults.publish_weight());

    QualityPolicy::new(complete_threshold, completeness_weight, publish_weight)
}

fn optional_f64_env(name: &str) -> Result<Option<f64>, AppError> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|error| AppError::Validation(format!("invalid {name}: {error}")))
        })
        .transpose()
}
