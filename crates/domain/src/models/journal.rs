//! Journal domain models.
//!
//! A journal is the root entity: it owns all settings, sections, categories
//! and role groups. Journals are created by the admin wizard and are never
//! hard-deleted through this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A journal hosted on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Journal {
    pub id: i64,
    /// URL slug, unique across the platform.
    pub path: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST request to create a journal via the admin wizard.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateJournalRequest {
    /// Journal title, seeded into the masthead settings.
    #[validate(custom(function = "validate_journal_title"))]
    pub title: String,

    /// URL slug for the journal.
    #[validate(custom(function = "shared::validation::validate_path_slug"))]
    pub path: String,

    /// Whether the journal appears on the site immediately.
    #[serde(default)]
    pub enabled: bool,
}

fn validate_journal_title(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Journal title is required".into());
        return Err(err);
    }
    Ok(())
}

/// PATCH request to enable or disable a journal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateJournalRequest {
    pub enabled: bool,
}

/// API representation of a journal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct JournalResponse {
    pub id: i64,
    pub path: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Journal> for JournalResponse {
    fn from(journal: Journal) -> Self {
        Self {
            id: journal.id,
            path: journal.path,
            enabled: journal.enabled,
            created_at: journal.created_at,
            updated_at: journal.updated_at,
        }
    }
}
