//! Section domain models.
//!
//! Sections are editorial subdivisions of a journal ("Articles", "Reviews").
//! The section row carries ordering and policy flags; the displayed title,
//! abbreviation and policy text live in `section_settings` rows owned by the
//! section.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A section merged with its settings rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Section {
    pub id: i64,
    pub journal_id: i64,
    /// Display order; assigned as count + 1 at creation, never re-packed.
    pub seq: i64,
    pub enabled: bool,
    pub title: String,
    pub abbreviation: String,
    pub policy: String,
}

/// POST request to create a section.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateSectionRequest {
    #[validate(custom(function = "validate_section_title"))]
    pub title: String,

    /// Defaults to the first three characters of the title, uppercased.
    pub abbreviation: Option<String>,

    /// Editorial policy text shown to authors.
    pub policy: Option<String>,
}

fn validate_section_title(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Section title is required".into());
        return Err(err);
    }
    Ok(())
}

/// PATCH request setting a section's enabled state.
///
/// The body carries the intended end state, and the repository writes
/// `is_inactive = NOT enabled` directly. There is deliberately no "toggle"
/// operation that derives the new state from the old one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SetSectionEnabledRequest {
    pub enabled: bool,
}

/// API representation of a section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SectionResponse {
    pub id: i64,
    pub journal_id: i64,
    pub seq: i64,
    pub enabled: bool,
    pub title: String,
    pub abbreviation: String,
    pub policy: String,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            id: section.id,
            journal_id: section.journal_id,
            seq: section.seq,
            enabled: section.enabled,
            title: section.title,
            abbreviation: section.abbreviation,
            policy: section.policy,
        }
    }
}

/// Derives the default abbreviation for a section title: the first three
/// characters, uppercased.
pub fn default_abbreviation(title: &str) -> String {
    title.chars().take(3).collect::<String>().to_uppercase()
}
