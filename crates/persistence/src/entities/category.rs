//! Category entity (database row mapping).

use std::collections::HashMap;

use sqlx::FromRow;

/// Database row mapping for the categories table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryEntity {
    pub id: i64,
    pub context_id: i64,
    pub path: String,
    pub parent_id: i64,
    pub seq: i64,
}

/// A category row merged with its settings rows (name → stored value).
#[derive(Debug, Clone)]
pub struct CategoryWithSettings {
    pub category: CategoryEntity,
    pub settings: HashMap<String, String>,
}

impl CategoryWithSettings {
    fn setting(&self, name: &str) -> String {
        self.settings.get(name).cloned().unwrap_or_default()
    }
}

impl From<CategoryWithSettings> for domain::models::Category {
    fn from(row: CategoryWithSettings) -> Self {
        let title = row.setting("title");
        let description = row.setting("description");
        Self {
            id: row.category.id,
            journal_id: row.category.context_id,
            path: row.category.path,
            parent_id: row.category.parent_id,
            seq: row.category.seq,
            title,
            description,
        }
    }
}
