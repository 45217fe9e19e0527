//! Section entity (database row mapping).

use std::collections::HashMap;

use sqlx::FromRow;

/// Database row mapping for the sections table.
///
/// The policy columns beyond `is_inactive` are written with fixed defaults
/// at creation and are not editable through the current admin surface.
#[derive(Debug, Clone, FromRow)]
pub struct SectionEntity {
    pub id: i64,
    pub journal_id: i64,
    pub seq: i64,
    pub is_inactive: bool,
    pub editor_restricted: bool,
    pub meta_indexed: bool,
    pub meta_reviewed: bool,
    pub abstracts_not_required: bool,
    pub hide_title: bool,
    pub hide_author: bool,
    pub abstract_word_count: i32,
}

/// A section row merged with its settings rows (name → stored value).
#[derive(Debug, Clone)]
pub struct SectionWithSettings {
    pub section: SectionEntity,
    pub settings: HashMap<String, String>,
}

impl SectionWithSettings {
    fn setting(&self, name: &str) -> String {
        self.settings.get(name).cloned().unwrap_or_default()
    }
}

impl From<SectionWithSettings> for domain::models::Section {
    fn from(row: SectionWithSettings) -> Self {
        let title = row.setting("title");
        let abbreviation = row.setting("abbrev");
        let policy = row.setting("policy");
        Self {
            id: row.section.id,
            journal_id: row.section.journal_id,
            seq: row.section.seq,
            enabled: !row.section.is_inactive,
            title,
            abbreviation,
            policy,
        }
    }
}
