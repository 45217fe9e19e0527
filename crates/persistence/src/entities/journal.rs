//! Journal entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the journals table.
#[derive(Debug, Clone, FromRow)]
pub struct JournalEntity {
    pub id: i64,
    pub path: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JournalEntity> for domain::models::Journal {
    fn from(entity: JournalEntity) -> Self {
        Self {
            id: entity.id,
            path: entity.path,
            enabled: entity.enabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
