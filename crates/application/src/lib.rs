//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod audit_trail_service;
mod quality_service;

pub use access_service::{AccessService, AdminDirectory};
pub use audit_trail_service::{AuditLogRepository, AuditTrailService, DEFAULT_HISTORY_LIMIT};
pub use quality_service::{ContentRepository, QualityReport, QualityService};
