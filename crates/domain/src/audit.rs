//! Change-log entries and their human-readable summaries.

use std::collections::BTreeSet;
use std::str::FromStr;

use cartaz_core::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

const CREATED_SUMMARY: &str = "Registro criado";
const REMOVED_SUMMARY: &str = "Registro removido";
const UNCHANGED_SUMMARY: &str = "Sem alterações visíveis";
const ABSENT_VALUE: &str = "—";

/// Mutation kinds recorded by the change-log trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    /// A row was created.
    Insert,
    /// A row was modified in place.
    Update,
    /// A row was removed.
    Delete,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "INSERT" => Ok(Self::Insert),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!(
                "unknown audit action '{value}'"
            ))),
        }
    }
}

/// Keys skipped when diffing update snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPolicy {
    ignored_keys: BTreeSet<String>,
}

impl DiffPolicy {
    /// Creates a policy ignoring the given bookkeeping keys.
    pub fn new<I, S>(ignored_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_keys: ignored_keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when `key` should be skipped in diff summaries.
    #[must_use]
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored_keys.contains(key)
    }
}

impl Default for DiffPolicy {
    fn default() -> Self {
        Self::new(["id", "updated_at"])
    }
}

/// One immutable entry of the record change log.
///
/// Entries are write-once rows produced by a storage trigger, so the
/// constructor normalizes whatever the store returns instead of
/// rejecting it: inserts drop the old snapshot, deletes drop the new
/// one, and updates fall back to empty snapshots when either side is
/// missing. One malformed row must never make a record's history
/// unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    id: Uuid,
    admin_email: String,
    action: AuditAction,
    old_values: Option<Map<String, Value>>,
    new_values: Option<Map<String, Value>>,
    created_at: DateTime<Utc>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl AuditEntry {
    /// Creates an entry, normalizing the snapshots to the action.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: Uuid,
        admin_email: impl Into<String>,
        action: AuditAction,
        old_values: Option<Map<String, Value>>,
        new_values: Option<Map<String, Value>>,
        created_at: DateTime<Utc>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        let (old_values, new_values) = match action {
            AuditAction::Insert => (None, new_values),
            AuditAction::Delete => (old_values, None),
            AuditAction::Update => (
                Some(old_values.unwrap_or_default()),
                Some(new_values.unwrap_or_default()),
            ),
        };

        Self {
            id,
            admin_email: admin_email.into(),
            action,
            old_values,
            new_values,
            created_at,
            ip_address,
            user_agent,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the email of the actor who made the change.
    #[must_use]
    pub fn admin_email(&self) -> &str {
        self.admin_email.as_str()
    }

    /// Returns the recorded mutation kind.
    #[must_use]
    pub fn action(&self) -> AuditAction {
        self.action
    }

    /// Returns the row snapshot before the change, when the action keeps one.
    #[must_use]
    pub fn old_values(&self) -> Option<&Map<String, Value>> {
        self.old_values.as_ref()
    }

    /// Returns the row snapshot after the change, when the action keeps one.
    #[must_use]
    pub fn new_values(&self) -> Option<&Map<String, Value>> {
        self.new_values.as_ref()
    }

    /// Returns when the change was recorded.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the source address of the change, if recorded.
    #[must_use]
    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    /// Returns the user agent of the change, if recorded.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Renders the change summary with the default diff policy.
    #[must_use]
    pub fn summarize(&self) -> String {
        self.summarize_with(&DiffPolicy::default())
    }

    /// Renders a human-readable summary of this change.
    ///
    /// Inserts and deletes map to fixed phrases. Updates list every
    /// changed key as `key: old → new` in key order, skipping the keys
    /// `policy` ignores; an update without visible changes also maps to
    /// a fixed phrase.
    #[must_use]
    pub fn summarize_with(&self, policy: &DiffPolicy) -> String {
        match self.action {
            AuditAction::Insert => CREATED_SUMMARY.to_owned(),
            AuditAction::Delete => REMOVED_SUMMARY.to_owned(),
            AuditAction::Update => {
                let empty = Map::new();
                let old = self.old_values.as_ref().unwrap_or(&empty);
                let new = self.new_values.as_ref().unwrap_or(&empty);

                let mut changes = Vec::new();
                for (key, value) in new {
                    if policy.is_ignored(key) || old.get(key) == Some(value) {
                        continue;
                    }

                    changes.push(format!(
                        "{key}: {} → {}",
                        render_optional(old.get(key)),
                        render_value(value)
                    ));
                }

                if changes.is_empty() {
                    UNCHANGED_SUMMARY.to_owned()
                } else {
                    changes.join(", ")
                }
            }
        }
    }

    /// Case-insensitive substring match against the actor email or action.
    ///
    /// A blank needle matches every entry, so clearing the filter box
    /// restores the full history without another fetch.
    #[must_use]
    pub fn matches_filter(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.admin_email.to_lowercase().contains(&needle)
            || self.action.as_str().to_lowercase().contains(&needle)
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn render_optional(value: Option<&Value>) -> String {
    value.map_or_else(|| ABSENT_VALUE.to_owned(), render_value)
}
