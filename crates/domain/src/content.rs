use std::str::FromStr;

use cartaz_core::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication lifecycle of editorial content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    /// Content still being prepared, hidden from the public site.
    #[default]
    Draft,
    /// Content live on the public site.
    Published,
}

impl PublicationStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    /// Returns true when the content is visible on the public site.
    #[must_use]
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl FromStr for PublicationStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(AppError::Validation(format!(
                "unknown publication status '{value}'"
            ))),
        }
    }
}

/// Scored snapshot of one event listing.
///
/// Every editorial field is optional so that scoring stays total over
/// half-filled drafts and legacy imports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Headline shown on cards and detail pages.
    pub title: Option<String>,
    /// Short editorial summary.
    pub summary: Option<String>,
    /// Scheduled start of the event.
    pub starts_at: Option<DateTime<Utc>>,
    /// Venue hosting the event.
    pub venue_id: Option<Uuid>,
    /// Organizer responsible for the event.
    pub organizer_id: Option<Uuid>,
    /// Cover image shown on the public site.
    pub cover_image_url: Option<String>,
    /// Curated tags; an empty list counts as missing.
    pub tags: Vec<String>,
    /// Publication lifecycle state.
    pub status: PublicationStatus,
}

/// Scored snapshot of one venue profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Venue name shown across the site.
    pub name: Option<String>,
    /// Editorial description of the venue.
    pub description: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City the venue belongs to.
    pub city: Option<String>,
    /// Cover image shown on the public site.
    pub cover_image_url: Option<String>,
    /// Phone, site or booking contact.
    pub contact_info: Option<String>,
    /// Publication lifecycle state.
    pub status: PublicationStatus,
}
