use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use cartaz_core::AppResult;
use cartaz_domain::{ContentTypeStats, EventRecord, QualityPolicy, QualityScores, VenueRecord};

/// Repository port for fetching scored content snapshots.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Lists every live event with its scored fields.
    async fn list_events(&self) -> AppResult<Vec<EventRecord>>;

    /// Lists every live venue with its scored fields.
    async fn list_venues(&self) -> AppResult<Vec<VenueRecord>>;
}

/// Quality report assembled for the editorial dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    /// Counters for event records.
    pub events: ContentTypeStats,
    /// Counters for venue records.
    pub venues: ContentTypeStats,
    /// Overall rates across both content types.
    pub scores: QualityScores,
    /// When the report was computed.
    pub generated_at: DateTime<Utc>,
}

/// Application service computing dashboard quality metrics.
#[derive(Clone)]
pub struct QualityService {
    repository: Arc<dyn ContentRepository>,
    policy: QualityPolicy,
}

impl QualityService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn ContentRepository>, policy: QualityPolicy) -> Self {
        Self { repository, policy }
    }

    /// Returns the policy the service scores with.
    #[must_use]
    pub fn policy(&self) -> &QualityPolicy {
        &self.policy
    }

    /// Fetches fresh snapshots and recomputes the aggregate report.
    ///
    /// Counters are always derived from the snapshots fetched in this
    /// call, never from cached state.
    pub async fn collect_report(&self) -> AppResult<QualityReport> {
        let event_records = self.repository.list_events().await?;
        let venue_records = self.repository.list_venues().await?;

        let events = ContentTypeStats::collect(&event_records, &self.policy);
        let venues = ContentTypeStats::collect(&venue_records, &self.policy);
        let scores = QualityScores::from_stats(&[events, venues], &self.policy);

        Ok(QualityReport {
            events,
            venues,
            scores,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use cartaz_core::{AppError, AppResult};
    use cartaz_domain::{EventRecord, PublicationStatus, QualityPolicy, VenueRecord};

    use super::{ContentRepository, QualityService};

    #[derive(Default)]
    struct FakeContentRepository {
        events: Vec<EventRecord>,
        venues: Vec<VenueRecord>,
        fail: bool,
    }

    #[async_trait]
    impl ContentRepository for FakeContentRepository {
        async fn list_events(&self) -> AppResult<Vec<EventRecord>> {
            if self.fail {
                return Err(AppError::Internal("content store offline".to_owned()));
            }

            Ok(self.events.clone())
        }

        async fn list_venues(&self) -> AppResult<Vec<VenueRecord>> {
            if self.fail {
                return Err(AppError::Internal("content store offline".to_owned()));
            }

            Ok(self.venues.clone())
        }
    }

    fn full_event(status: PublicationStatus) -> EventRecord {
        EventRecord {
            id: Uuid::new_v4(),
            title: Some("Festival de Jazz".to_owned()),
            summary: Some("Três dias de jazz no centro histórico".to_owned()),
            starts_at: Some(Utc::now()),
            venue_id: Some(Uuid::new_v4()),
            organizer_id: Some(Uuid::new_v4()),
            cover_image_url: Some("https://cdn.example.com/jazz.jpg".to_owned()),
            tags: vec!["jazz".to_owned(), "festival".to_owned()],
            status,
        }
    }

    fn sparse_venue(status: PublicationStatus) -> VenueRecord {
        VenueRecord {
            id: Uuid::new_v4(),
            name: Some("Armazém do Campo".to_owned()),
            status,
            ..VenueRecord::default()
        }
    }

    fn service(repository: FakeContentRepository) -> QualityService {
        QualityService::new(Arc::new(repository), QualityPolicy::default())
    }

    #[tokio::test]
    async fn report_aggregates_both_content_types() {
        let service = service(FakeContentRepository {
            events: vec![full_event(PublicationStatus::Published)],
            venues: vec![sparse_venue(PublicationStatus::Draft)],
            fail: false,
        });

        let report = service.collect_report().await.unwrap_or_else(|_| unreachable!());

        assert_eq!(report.events.total, 1);
        assert_eq!(report.events.complete, 1);
        assert_eq!(report.venues.total, 1);
        assert_eq!(report.venues.incomplete, 1);
        assert!((report.scores.completeness_rate - 50.0).abs() < 1e-9);
        assert!((report.scores.publish_rate - 100.0).abs() < 1e-9);
        assert!((report.scores.quality_score - 70.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_stores_produce_zeroed_report() {
        let service = service(FakeContentRepository::default());

        let report = service.collect_report().await.unwrap_or_else(|_| unreachable!());

        assert_eq!(report.events.total, 0);
        assert_eq!(report.venues.total, 0);
        assert!(report.scores.completeness_rate.abs() < f64::EPSILON);
        assert!(report.scores.publish_rate.abs() < f64::EPSILON);
        assert!(report.scores.quality_score.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn store_errors_propagate_with_their_message() {
        let service = service(FakeContentRepository {
            fail: true,
            ..FakeContentRepository::default()
        });

        let result = service.collect_report().await;

        assert!(
            matches!(result, Err(AppError::Internal(message)) if message == "content store offline")
        );
    }

    #[tokio::test]
    async fn rich_drafts_count_as_needing_review() {
        let service = service(FakeContentRepository {
            events: vec![full_event(PublicationStatus::Draft)],
            venues: Vec::new(),
            fail: false,
        });

        let report = service.collect_report().await.unwrap_or_else(|_| unreachable!());

        assert_eq!(report.events.needs_review, 1);
        assert!((report.scores.publish_rate).abs() < f64::EPSILON);
    }
}
