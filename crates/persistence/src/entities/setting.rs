//! Setting row entity (database row mapping).
//!
//! The same row shape backs all three settings tables (`journal_settings`,
//! `section_settings`, `category_settings`): a string value keyed by
//! `(owner_id, setting_name, locale)`.

use sqlx::FromRow;

/// Database row mapping for a settings table row.
#[derive(Debug, Clone, FromRow)]
pub struct SettingRowEntity {
    pub owner_id: i64,
    pub setting_name: String,
    pub setting_value: String,
    pub locale: String,
}
