use cartaz_application::QualityReport;
use cartaz_domain::{AuditEntry, ContentTypeStats};
use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ready: bool,
    pub postgres: HealthDependencyStatus,
}

/// Health status of one backing dependency.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/health-dependency-status.ts"
)]
pub struct HealthDependencyStatus {
    pub status: &'static str,
    pub detail: Option<String>,
}

/// API representation of quality counters for one content type.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/content-type-stats-response.ts"
)]
pub struct ContentTypeStatsResponse {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub draft: usize,
    pub published: usize,
    pub needs_review: usize,
}

/// API representation of the aggregated quality report.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/quality-report-response.ts"
)]
pub struct QualityReportResponse {
    pub events: ContentTypeStatsResponse,
    pub venues: ContentTypeStatsResponse,
    pub completeness_rate: f64,
    pub publish_rate: f64,
    pub quality_score: f64,
    pub generated_at: String,
}

/// API representation of one audit history entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/audit-entry-response.ts"
)]
pub struct AuditEntryResponse {
    pub id: String,
    pub admin_email: String,
    pub action: String,
    pub summary: String,
    pub created_at: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl From<ContentTypeStats> for ContentTypeStatsResponse {
    fn from(stats: ContentTypeStats) -> Self {
        Self {
            total: stats.total,
            complete: stats.complete,
            incomplete: stats.incomplete,
            draft: stats.draft,
            published: stats.published,
            needs_review: stats.needs_review,
        }
    }
}

impl From<QualityReport> for QualityReportResponse {
    fn from(report: QualityReport) -> Self {
        Self {
            events: ContentTypeStatsResponse::from(report.events),
            venues: ContentTypeStatsResponse::from(report.venues),
            completeness_rate: report.scores.completeness_rate,
            publish_rate: report.scores.publish_rate,
            quality_score: report.scores.quality_score,
            generated_at: report.generated_at.to_rfc3339(),
        }
    }
}

impl From<AuditEntry> for AuditEntryResponse {
    fn from(entry: AuditEntry) -> Self {
        let summary = entry.summarize();

        Self {
            id: entry.id().to_string(),
            admin_email: entry.admin_email().to_owned(),
            action: entry.action().as_str().to_owned(),
            summary,
            created_at: entry.created_at().to_rfc3339(),
            ip_address: entry.ip_address().map(ToOwned::to_owned),
            user_agent: entry.user_agent().map(ToOwned::to_owned),
        }
    }
}
