//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod admin;
mod audit;
mod completeness;
mod content;
mod quality;

pub use admin::{AdminUser, EmailAddress};
pub use audit::{AuditAction, AuditEntry, DiffPolicy};
pub use completeness::{
    ScoredRecord, WeightedField, event_fields, venue_fields, weighted_completeness,
};
pub use content::{EventRecord, PublicationStatus, VenueRecord};
pub use quality::{ContentTypeStats, QualityPolicy, QualityScores, percentage};
