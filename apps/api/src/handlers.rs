use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use cartaz_application::DEFAULT_HISTORY_LIMIT;
use cartaz_core::AdminIdentity;

use crate::dto::{
    AuditEntryResponse, HealthDependencyStatus, HealthResponse, QualityReportResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub mod audit;
pub mod health;
pub mod quality;

#[cfg(test)]
mod tests;
