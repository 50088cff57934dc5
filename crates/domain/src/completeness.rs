//! Weighted completeness scoring for editorial records.
//!
//! Each content type carries a fixed table of scored fields. A record's
//! completeness is the percentage of total weight covered by the fields
//! it actually fills in, so editors see at a glance which drafts are
//! ready for publication.

use crate::content::{EventRecord, PublicationStatus, VenueRecord};

/// One scored field: a stable label, its weight, and a presence check.
pub struct WeightedField<R> {
    label: &'static str,
    weight: u32,
    is_present: fn(&R) -> bool,
}

impl<R> WeightedField<R> {
    /// Returns the stable field label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the weight contributed when the field is filled.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Returns true when the field counts as filled on `record`.
    #[must_use]
    pub fn is_present(&self, record: &R) -> bool {
        (self.is_present)(record)
    }
}

const EVENT_FIELDS: &[WeightedField<EventRecord>] = &[
    WeightedField {
        label: "title",
        weight: 20,
        is_present: |record| non_blank(record.title.as_deref()),
    },
    WeightedField {
        label: "summary",
        weight: 15,
        is_present: |record| non_blank(record.summary.as_deref()),
    },
    WeightedField {
        label: "starts_at",
        weight: 15,
        is_present: |record| record.starts_at.is_some(),
    },
    WeightedField {
        label: "venue_id",
        weight: 10,
        is_present: |record| record.venue_id.is_some(),
    },
    WeightedField {
        label: "organizer_id",
        weight: 10,
        is_present: |record| record.organizer_id.is_some(),
    },
    WeightedField {
        label: "cover_image_url",
        weight: 15,
        is_present: |record| non_blank(record.cover_image_url.as_deref()),
    },
    WeightedField {
        label: "tags",
        weight: 15,
        is_present: |record| !record.tags.is_empty(),
    },
];

const VENUE_FIELDS: &[WeightedField<VenueRecord>] = &[
    WeightedField {
        label: "name",
        weight: 25,
        is_present: |record| non_blank(record.name.as_deref()),
    },
    WeightedField {
        label: "description",
        weight: 20,
        is_present: |record| non_blank(record.description.as_deref()),
    },
    WeightedField {
        label: "address",
        weight: 20,
        is_present: |record| non_blank(record.address.as_deref()),
    },
    WeightedField {
        label: "city",
        weight: 10,
        is_present: |record| non_blank(record.city.as_deref()),
    },
    WeightedField {
        label: "cover_image_url",
        weight: 15,
        is_present: |record| non_blank(record.cover_image_url.as_deref()),
    },
    WeightedField {
        label: "contact_info",
        weight: 10,
        is_present: |record| non_blank(record.contact_info.as_deref()),
    },
];

fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

/// Returns the scored fields for event records.
#[must_use]
pub fn event_fields() -> &'static [WeightedField<EventRecord>] {
    EVENT_FIELDS
}

/// Returns the scored fields for venue records.
#[must_use]
pub fn venue_fields() -> &'static [WeightedField<VenueRecord>] {
    VENUE_FIELDS
}

/// Computes the weighted completeness of `record` over `fields`.
///
/// The result is the percentage of total weight carried by filled
/// fields, between 0.0 and 100.0, or 0.0 for an empty field table.
#[must_use]
pub fn weighted_completeness<R>(record: &R, fields: &[WeightedField<R>]) -> f64 {
    let total: u32 = fields.iter().map(|field| field.weight()).sum();
    if total == 0 {
        return 0.0;
    }

    let earned: u32 = fields
        .iter()
        .filter(|field| field.is_present(record))
        .map(|field| field.weight())
        .sum();

    f64::from(earned) / f64::from(total) * 100.0
}

/// Record types with a weighted completeness score.
pub trait ScoredRecord {
    /// Weighted completeness between 0.0 and 100.0.
    fn completeness(&self) -> f64;

    /// Publication status used for draft and published counts.
    fn status(&self) -> PublicationStatus;
}

impl ScoredRecord for EventRecord {
    fn completeness(&self) -> f64 {
        weighted_completeness(self, EVENT_FIELDS)
    }

    fn status(&self) -> PublicationStatus {
        self.status
    }
}

impl ScoredRecord for VenueRecord {
    fn completeness(&self) -> f64 {
        weighted_completeness(self, VENUE_FIELDS)
    }

    fn status(&self) -> PublicationStatus {
        self.status
    }
}
