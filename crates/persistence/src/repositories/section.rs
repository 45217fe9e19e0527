//! Section repository for database operations.

use std::collections::HashMap;

use sqlx::PgPool;

use domain::models::DEFAULT_LOCALE;

use crate::entities::{SectionEntity, SectionWithSettings, SettingRowEntity};
use crate::metrics::QueryTimer;

const SECTION_COLUMNS: &str = "id, journal_id, seq, is_inactive, editor_restricted, \
     meta_indexed, meta_reviewed, abstracts_not_required, hide_title, hide_author, \
     abstract_word_count";

/// Repository for section-related database operations.
#[derive(Clone)]
pub struct SectionRepository {
    pool: PgPool,
}

impl SectionRepository {
    /// Creates a new SectionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists a journal's sections with their settings, ordered by seq.
    ///
    /// Section rows and setting rows are fetched separately and merged with
    /// an in-memory grouping step (settings grouped by owner id), not a
    /// relational join.
    pub async fn list_with_settings(
        &self,
        journal_id: i64,
    ) -> Result<Vec<SectionWithSettings>, sqlx::Error> {
        let timer = QueryTimer::new("list_sections");

        let sections = sqlx::query_as::<_, SectionEntity>(&format!(
            r#"
            SELECT {SECTION_COLUMNS}
            FROM sections
            WHERE journal_id = $1
            ORDER BY seq
            "#
        ))
        .bind(journal_id)
        .fetch_all(&self.pool)
        .await?;

        let settings = sqlx::query_as::<_, SettingRowEntity>(
            r#"
            SELECT s.owner_id, s.setting_name, s.setting_value, s.locale
            FROM section_settings s
            JOIN sections sec ON sec.id = s.owner_id
            WHERE sec.journal_id = $1
            "#,
        )
        .bind(journal_id)
        .fetch_all(&self.pool)
        .await
        .map(group_by_owner);

        let mut grouped = settings?;
        let result = sections
            .into_iter()
            .map(|section| {
                let settings = grouped.remove(&section.id).unwrap_or_default();
                SectionWithSettings { section, settings }
            })
            .collect();

        timer.record();
        Ok(result)
    }

    /// Finds one section with its settings.
    pub async fn find_with_settings(
        &self,
        id: i64,
    ) -> Result<Option<SectionWithSettings>, sqlx::Error> {
        let timer = QueryTimer::new("find_section");

        let section = sqlx::query_as::<_, SectionEntity>(&format!(
            r#"
            SELECT {SECTION_COLUMNS}
            FROM sections
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let section = match section {
            Some(section) => section,
            None => {
                timer.record();
                return Ok(None);
            }
        };

        let settings = sqlx::query_as::<_, SettingRowEntity>(
            r#"
            SELECT owner_id, setting_name, setting_value, locale
            FROM section_settings
            WHERE owner_id = $1 AND locale = $2
            "#,
        )
        .bind(id)
        .bind(DEFAULT_LOCALE)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.setting_name, row.setting_value))
        .collect();

        timer.record();
        Ok(Some(SectionWithSettings { section, settings }))
    }

    /// Creates a section with its title/abbreviation/policy settings.
    ///
    /// The section row gets `seq` = current count + 1 and fixed default
    /// policy flags. Row and settings are written in one transaction, so a
    /// failure part-way leaves no orphaned section row.
    pub async fn create(
        &self,
        journal_id: i64,
        title: &str,
        abbreviation: &str,
        policy: &str,
    ) -> Result<SectionWithSettings, sqlx::Error> {
        let timer = QueryTimer::new("create_section");
        let mut tx = self.pool.begin().await?;

        let seq = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sections WHERE journal_id = $1",
        )
        .bind(journal_id)
        .fetch_one(&mut *tx)
        .await?
            + 1;

        let section = sqlx::query_as::<_, SectionEntity>(&format!(
            r#"
            INSERT INTO sections (
                journal_id, seq, is_inactive, editor_restricted, meta_indexed,
                meta_reviewed, abstracts_not_required, hide_title, hide_author,
                abstract_word_count
            )
            VALUES ($1, $2, false, false, true, true, false, false, false, 0)
            RETURNING {SECTION_COLUMNS}
            "#
        ))
        .bind(journal_id)
        .bind(seq)
        .fetch_one(&mut *tx)
        .await?;

        let mut settings = HashMap::new();
        for (name, value) in [
            ("title", title),
            ("abbrev", abbreviation),
            ("policy", policy),
        ] {
            sqlx::query(
                r#"
                INSERT INTO section_settings (owner_id, setting_name, setting_value, locale)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(section.id)
            .bind(name)
            .bind(value)
            .bind(DEFAULT_LOCALE)
            .execute(&mut *tx)
            .await?;
            settings.insert(name.to_string(), value.to_string());
        }

        tx.commit().await?;
        timer.record();
        Ok(SectionWithSettings { section, settings })
    }

    /// Sets a section's enabled state.
    ///
    /// The write carries the intended end state: `is_inactive` is set to the
    /// negation of `enabled`, never to a value derived from the row's
    /// previous state.
    pub async fn set_enabled(
        &self,
        id: i64,
        enabled: bool,
    ) -> Result<Option<SectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_section_enabled");
        let result = sqlx::query_as::<_, SectionEntity>(&format!(
            r#"
            UPDATE sections
            SET is_inactive = $2
            WHERE id = $1
            RETURNING {SECTION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(!enabled)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Deletes a section and its settings rows in one transaction.
    ///
    /// Returns false if no section with the given id exists.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_section");
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM section_settings WHERE owner_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }
}

/// Groups setting rows by owner id, keeping only the default locale.
fn group_by_owner(rows: Vec<SettingRowEntity>) -> HashMap<i64, HashMap<String, String>> {
    let mut grouped: HashMap<i64, HashMap<String, String>> = HashMap::new();
    for row in rows {
        if row.locale != DEFAULT_LOCALE {
            continue;
        }
        grouped
            .entry(row.owner_id)
            .or_default()
            .insert(row.setting_name, row.setting_value);
    }
    grouped
}
