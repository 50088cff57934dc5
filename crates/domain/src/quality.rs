use cartaz_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::completeness::ScoredRecord;

const DEFAULT_COMPLETE_THRESHOLD: f64 = 60.0;
const DEFAULT_COMPLETENESS_WEIGHT: f64 = 0.6;
const DEFAULT_PUBLISH_WEIGHT: f64 = 0.4;

/// Validated scoring constants shared by every quality aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityPolicy {
    complete_threshold: f64,
    completeness_weight: f64,
    publish_weight: f64,
}

impl QualityPolicy {
    /// Creates a validated policy.
    ///
    /// The threshold must lie in `[0, 100]`; the two weights must lie in
    /// `[0, 1]` and sum to one.
    pub fn new(
        complete_threshold: f64,
        completeness_weight: f64,
        publish_weight: f64,
    ) -> AppResult<Self> {
        if !(0.0..=100.0).contains(&complete_threshold) {
            return Err(AppError::Validation(
                "complete threshold must lie between 0 and 100".to_owned(),
            ));
        }

        if !(0.0..=1.0).contains(&completeness_weight) || !(0.0..=1.0).contains(&publish_weight) {
            return Err(AppError::Validation(
                "score weights must lie between 0 and 1".to_owned(),
            ));
        }

        if ((completeness_weight + publish_weight) - 1.0).abs() > 1e-9 {
            return Err(AppError::Validation(
                "score weights must sum to 1".to_owned(),
            ));
        }

        Ok(Self {
            complete_threshold,
            completeness_weight,
            publish_weight,
        })
    }

    /// Returns the completeness percentage at which a record counts as complete.
    #[must_use]
    pub fn complete_threshold(&self) -> f64 {
        self.complete_threshold
    }

    /// Returns the weight of the completeness rate in the combined score.
    #[must_use]
    pub fn completeness_weight(&self) -> f64 {
        self.completeness_weight
    }

    /// Returns the weight of the publish rate in the combined score.
    #[must_use]
    pub fn publish_weight(&self) -> f64 {
        self.publish_weight
    }

    /// Combines the two rates into the final 0-100 quality score.
    #[must_use]
    pub fn combine(&self, completeness_rate: f64, publish_rate: f64) -> f64 {
        self.completeness_weight * completeness_rate + self.publish_weight * publish_rate
    }
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            complete_threshold: DEFAULT_COMPLETE_THRESHOLD,
            completeness_weight: DEFAULT_COMPLETENESS_WEIGHT,
            publish_weight: DEFAULT_PUBLISH_WEIGHT,
        }
    }
}

/// Quality counters for one content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeStats {
    /// Records inspected.
    pub total: usize,
    /// Records at or above the completeness threshold.
    pub complete: usize,
    /// Records below the completeness threshold.
    pub incomplete: usize,
    /// Records still in draft.
    pub draft: usize,
    /// Records visible on the public site.
    pub published: usize,
    /// Complete records still sitting in draft.
    pub needs_review: usize,
}

impl ContentTypeStats {
    /// Folds a snapshot of records into counters under `policy`.
    #[must_use]
    pub fn collect<R: ScoredRecord>(records: &[R], policy: &QualityPolicy) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.total += 1;

            let complete = record.completeness() >= policy.complete_threshold();
            if complete {
                stats.complete += 1;
            } else {
                stats.incomplete += 1;
            }

            if record.status().is_published() {
                stats.published += 1;
            } else {
                stats.draft += 1;
            }

            if complete && !record.status().is_published() {
                stats.needs_review += 1;
            }
        }

        stats
    }

    /// Returns how many complete records are already published.
    #[must_use]
    pub fn published_among_complete(&self) -> usize {
        self.complete - self.needs_review
    }
}

/// Overall rates derived from per-type counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Percentage of records that are complete.
    pub completeness_rate: f64,
    /// Percentage of complete records that are published.
    pub publish_rate: f64,
    /// Weighted combination of the two rates.
    pub quality_score: f64,
}

impl QualityScores {
    /// Derives the overall rates across every tracked content type.
    #[must_use]
    pub fn from_stats(stats: &[ContentTypeStats], policy: &QualityPolicy) -> Self {
        let total: usize = stats.iter().map(|entry| entry.total).sum();
        let complete: usize = stats.iter().map(|entry| entry.complete).sum();
        let published_complete: usize = stats
            .iter()
            .map(|entry| entry.published_among_complete())
            .sum();

        let completeness_rate = percentage(complete, total);
        let publish_rate = percentage(published_complete, complete);

        Self {
            completeness_rate,
            publish_rate,
            quality_score: policy.combine(completeness_rate, publish_rate),
        }
    }
}

/// Returns `part` as a percentage of `whole`, 0.0 for an empty whole.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{ContentTypeStats, QualityPolicy, QualityScores, percentage};
    use crate::completeness::ScoredRecord;
    use crate::content::{PublicationStatus, VenueRecord};

    struct StubRecord {
        completeness: f64,
        status: PublicationStatus,
    }

    impl ScoredRecord for StubRecord {
        fn completeness(&self) -> f64 {
            self.completeness
        }

        fn status(&self) -> PublicationStatus {
            self.status
        }
    }

    fn stub(completeness: f64, status: PublicationStatus) -> StubRecord {
        StubRecord {
            completeness,
            status,
        }
    }

    #[test]
    fn policy_rejects_threshold_out_of_range() {
        assert!(QualityPolicy::new(120.0, 0.6, 0.4).is_err());
        assert!(QualityPolicy::new(-1.0, 0.6, 0.4).is_err());
    }

    #[test]
    fn policy_rejects_weights_that_do_not_sum_to_one() {
        assert!(QualityPolicy::new(60.0, 0.6, 0.6).is_err());
        assert!(QualityPolicy::new(60.0, 0.9, 0.0).is_err());
    }

    #[test]
    fn default_policy_uses_documented_constants() {
        let policy = QualityPolicy::default();
        assert!((policy.complete_threshold() - 60.0).abs() < f64::EPSILON);
        assert!((policy.completeness_weight() - 0.6).abs() < f64::EPSILON);
        assert!((policy.publish_weight() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn counters_partition_by_completeness_and_status() {
        let records = vec![
            stub(100.0, PublicationStatus::Published),
            stub(80.0, PublicationStatus::Draft),
            stub(60.0, PublicationStatus::Draft),
            stub(40.0, PublicationStatus::Published),
            stub(0.0, PublicationStatus::Draft),
        ];

        let stats = ContentTypeStats::collect(&records, &QualityPolicy::default());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.complete, 3);
        assert_eq!(stats.incomplete, 2);
        assert_eq!(stats.draft, 3);
        assert_eq!(stats.published, 2);
        assert_eq!(stats.needs_review, 2);
        assert_eq!(stats.published_among_complete(), 1);
    }

    #[test]
    fn counters_always_partition_the_total() {
        let policy = QualityPolicy::default();
        let mut records = Vec::new();
        for step in 0..=20usize {
            let completeness = step as f64 * 5.0;
            records.push(stub(completeness, PublicationStatus::Draft));
            records.push(stub(completeness, PublicationStatus::Published));
        }

        let stats = ContentTypeStats::collect(&records, &policy);

        assert_eq!(stats.complete + stats.incomplete, stats.total);
        assert_eq!(stats.draft + stats.published, stats.total);
        assert!(stats.needs_review <= stats.complete);
    }

    #[test]
    fn empty_snapshot_yields_zero_rates() {
        let scores = QualityScores::from_stats(
            &[ContentTypeStats::default(), ContentTypeStats::default()],
            &QualityPolicy::default(),
        );

        assert!(scores.completeness_rate.abs() < f64::EPSILON);
        assert!(scores.publish_rate.abs() < f64::EPSILON);
        assert!(scores.quality_score.abs() < f64::EPSILON);
    }

    #[test]
    fn publish_rate_is_zero_when_nothing_is_complete() {
        let records = vec![stub(10.0, PublicationStatus::Published)];
        let stats = ContentTypeStats::collect(&records, &QualityPolicy::default());
        let scores = QualityScores::from_stats(&[stats], &QualityPolicy::default());

        assert!(scores.publish_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn quality_score_combines_rates_with_policy_weights() {
        let stats = ContentTypeStats {
            total: 10,
            complete: 8,
            incomplete: 2,
            draft: 6,
            published: 4,
            needs_review: 4,
        };
        let scores = QualityScores::from_stats(&[stats], &QualityPolicy::default());

        assert!((scores.completeness_rate - 80.0).abs() < 1e-9);
        assert!((scores.publish_rate - 50.0).abs() < 1e-9);
        assert!((scores.quality_score - 68.0).abs() < 1e-9);
    }

    #[test]
    fn quality_score_stays_within_bounds_for_any_rates() {
        let policy = QualityPolicy::default();
        for completeness_step in 0..=20usize {
            for publish_step in 0..=20usize {
                let score = policy.combine(
                    completeness_step as f64 * 5.0,
                    publish_step as f64 * 5.0,
                );
                assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
            }
        }
    }

    #[test]
    fn sparse_venue_counts_as_incomplete() {
        let record = VenueRecord {
            id: Uuid::new_v4(),
            name: Some("Sesc Pompeia".to_owned()),
            address: Some("Rua Clélia, 93".to_owned()),
            city: Some("São Paulo".to_owned()),
            ..VenueRecord::default()
        };

        let stats =
            ContentTypeStats::collect(std::slice::from_ref(&record), &QualityPolicy::default());

        assert_eq!(stats.complete, 0);
        assert_eq!(stats.incomplete, 1);
    }

    #[test]
    fn rich_draft_venue_needs_review() {
        let record = VenueRecord {
            id: Uuid::new_v4(),
            name: Some("Sesc Pompeia".to_owned()),
            description: Some("Centro cultural projetado por Lina Bo Bardi".to_owned()),
            address: Some("Rua Clélia, 93".to_owned()),
            city: Some("São Paulo".to_owned()),
            cover_image_url: Some("https://cdn.example.com/sesc.jpg".to_owned()),
            contact_info: None,
            status: PublicationStatus::Draft,
        };

        let stats =
            ContentTypeStats::collect(std::slice::from_ref(&record), &QualityPolicy::default());

        assert_eq!(stats.complete, 1);
        assert_eq!(stats.needs_review, 1);
        assert_eq!(stats.published_among_complete(), 0);
    }

    #[test]
    fn percentage_guards_division_by_zero() {
        assert!(percentage(0, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
