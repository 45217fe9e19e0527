//! Journal repository for database operations.

use sqlx::PgPool;

use domain::models::{JournalRole, DEFAULT_LOCALE};

use crate::entities::JournalEntity;
use crate::metrics::QueryTimer;

/// Repository for journal-related database operations.
#[derive(Clone)]
pub struct JournalRepository {
    pool: PgPool,
}

impl JournalRepository {
    /// Creates a new JournalRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a journal, seeds its masthead title setting and its default
    /// role groups. All rows are written in one transaction; a failure at
    /// any step leaves nothing behind.
    pub async fn create(
        &self,
        path: &str,
        enabled: bool,
        title: &str,
    ) -> Result<JournalEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_journal");
        let mut tx = self.pool.begin().await?;

        let journal = sqlx::query_as::<_, JournalEntity>(
            r#"
            INSERT INTO journals (path, enabled)
            VALUES ($1, $2)
            RETURNING id, path, enabled, created_at, updated_at
            "#,
        )
        .bind(path)
        .bind(enabled)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO journal_settings (owner_id, setting_name, setting_value, locale)
            VALUES ($1, 'journal_title', $2, $3)
            "#,
        )
        .bind(journal.id)
        .bind(title)
        .bind(DEFAULT_LOCALE)
        .execute(&mut *tx)
        .await?;

        for role in JournalRole::DEFAULTS {
            sqlx::query(
                r#"
                INSERT INTO user_groups (journal_id, role)
                VALUES ($1, $2)
                "#,
            )
            .bind(journal.id)
            .bind(role.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(journal)
    }

    /// Finds a journal by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<JournalEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_journal_by_id");
        let result = sqlx::query_as::<_, JournalEntity>(
            r#"
            SELECT id, path, enabled, created_at, updated_at
            FROM journals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Lists all journals ordered by path.
    pub async fn list(&self) -> Result<Vec<JournalEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_journals");
        let result = sqlx::query_as::<_, JournalEntity>(
            r#"
            SELECT id, path, enabled, created_at, updated_at
            FROM journals
            ORDER BY path
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Sets a journal's enabled flag to the given state.
    pub async fn set_enabled(
        &self,
        id: i64,
        enabled: bool,
    ) -> Result<Option<JournalEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_journal_enabled");
        let result = sqlx::query_as::<_, JournalEntity>(
            r#"
            UPDATE journals
            SET enabled = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, path, enabled, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(enabled)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
