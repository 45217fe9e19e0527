//! Journal settings repository for database operations.
//!
//! Journal-level settings are rows of `(owner_id, setting_name,
//! setting_value, locale)` with a unique key on `(owner_id, setting_name,
//! locale)`. Saves are upserts on that key; overlapping writers resolve by
//! last write wins, there is no optimistic concurrency token.

use std::collections::{HashMap, HashSet};

use sqlx::PgPool;

use crate::entities::SettingRowEntity;
use crate::metrics::QueryTimer;

/// Repository for journal-level setting rows.
#[derive(Clone)]
pub struct JournalSettingsRepository {
    pool: PgPool,
}

impl JournalSettingsRepository {
    /// Creates a new JournalSettingsRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches all setting rows for a journal.
    pub async fn get_all(&self, journal_id: i64) -> Result<Vec<SettingRowEntity>, sqlx::Error> {
        let timer = QueryTimer::new("get_journal_settings");
        let result = sqlx::query_as::<_, SettingRowEntity>(
            r#"
            SELECT owner_id, setting_name, setting_value, locale
            FROM journal_settings
            WHERE owner_id = $1
            ORDER BY setting_name
            "#,
        )
        .bind(journal_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Fetches a journal's settings under one locale as a name → value map.
    pub async fn get_map(
        &self,
        journal_id: i64,
        locale: &str,
    ) -> Result<HashMap<String, String>, sqlx::Error> {
        let rows = self.get_all(journal_id).await?;
        Ok(rows
            .into_iter()
            .filter(|row| row.locale == locale)
            .map(|row| (row.setting_name, row.setting_value))
            .collect())
    }

    /// Returns the set of setting names already stored for a journal under
    /// one locale.
    pub async fn existing_names(
        &self,
        journal_id: i64,
        locale: &str,
    ) -> Result<HashSet<String>, sqlx::Error> {
        let timer = QueryTimer::new("journal_setting_names");
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT setting_name
            FROM journal_settings
            WHERE owner_id = $1 AND locale = $2
            "#,
        )
        .bind(journal_id)
        .bind(locale)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(names?.into_iter().collect())
    }

    /// Upserts a batch of name → stored-value pairs under one locale.
    ///
    /// The whole batch is written in a single transaction; each row resolves
    /// conflicts on `(owner_id, setting_name, locale)` by replacing the
    /// value in place.
    pub async fn upsert_many(
        &self,
        journal_id: i64,
        locale: &str,
        entries: &[(String, String)],
    ) -> Result<(), sqlx::Error> {
        if entries.is_empty() {
            return Ok(());
        }

        let timer = QueryTimer::new("upsert_journal_settings");
        let mut tx = self.pool.begin().await?;

        for (name, value) in entries {
            sqlx::query(
                r#"
                INSERT INTO journal_settings (owner_id, setting_name, setting_value, locale)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (owner_id, setting_name, locale)
                DO UPDATE SET setting_value = $3
                "#,
            )
            .bind(journal_id)
            .bind(name)
            .bind(value)
            .bind(locale)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Inserts name → stored-value pairs only where no row exists yet for
    /// `(owner_id, setting_name, locale)`. Existing rows are never touched;
    /// this backs the legacy import path.
    pub async fn insert_missing(
        &self,
        journal_id: i64,
        locale: &str,
        entries: &[(String, String)],
    ) -> Result<(), sqlx::Error> {
        if entries.is_empty() {
            return Ok(());
        }

        let timer = QueryTimer::new("insert_missing_journal_settings");
        let mut tx = self.pool.begin().await?;

        for (name, value) in entries {
            sqlx::query(
                r#"
                INSERT INTO journal_settings (owner_id, setting_name, setting_value, locale)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (owner_id, setting_name, locale) DO NOTHING
                "#,
            )
            .bind(journal_id)
            .bind(name)
            .bind(value)
            .bind(locale)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(())
    }
}
