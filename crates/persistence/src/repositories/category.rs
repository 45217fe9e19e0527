//! Category repository for database operations.

use std::collections::HashMap;

use sqlx::PgPool;

use domain::models::{DEFAULT_LOCALE, ROOT_PARENT_ID};

use crate::entities::{CategoryEntity, CategoryWithSettings, SettingRowEntity};
use crate::metrics::QueryTimer;

/// Repository for category-related database operations.
#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists a journal's categories with their settings, ordered by seq.
    ///
    /// Settings are merged with an in-memory grouping step, same as
    /// sections.
    pub async fn list_with_settings(
        &self,
        journal_id: i64,
    ) -> Result<Vec<CategoryWithSettings>, sqlx::Error> {
        let timer = QueryTimer::new("list_categories");

        let categories = sqlx::query_as::<_, CategoryEntity>(
            r#"
            SELECT id, context_id, path, parent_id, seq
            FROM categories
            WHERE context_id = $1
            ORDER BY seq
            "#,
        )
        .bind(journal_id)
        .fetch_all(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, SettingRowEntity>(
            r#"
            SELECT s.owner_id, s.setting_name, s.setting_value, s.locale
            FROM category_settings s
            JOIN categories c ON c.id = s.owner_id
            WHERE c.context_id = $1
            "#,
        )
        .bind(journal_id)
        .fetch_all(&self.pool)
        .await?;

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

        let result = categories
            .into_iter()
            .map(|category| {
                let settings = grouped.remove(&category.id).unwrap_or_default();
                CategoryWithSettings { category, settings }
            })
            .collect();

        timer.record();
        Ok(result)
    }

    /// Creates a category with its title/description settings.
    ///
    /// `parent_id` is fixed at the root (the hierarchy is flat) and `seq` is
    /// the current count + 1. Row and settings are written in one
    /// transaction. A duplicate (journal, path) pair surfaces as a unique
    /// constraint violation.
    pub async fn create(
        &self,
        journal_id: i64,
        path: &str,
        title: &str,
        description: &str,
    ) -> Result<CategoryWithSettings, sqlx::Error> {
        let timer = QueryTimer::new("create_category");
        let mut tx = self.pool.begin().await?;

        let seq = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM categories WHERE context_id = $1",
        )
        .bind(journal_id)
        .fetch_one(&mut *tx)
        .await?
            + 1;

        let category = sqlx::query_as::<_, CategoryEntity>(
            r#"
            INSERT INTO categories (context_id, path, parent_id, seq)
            VALUES ($1, $2, $3, $4)
            RETURNING id, context_id, path, parent_id, seq
            "#,
        )
        .bind(journal_id)
        .bind(path)
        .bind(ROOT_PARENT_ID)
        .bind(seq)
        .fetch_one(&mut *tx)
        .await?;

        let mut settings = HashMap::new();
        for (name, value) in [("title", title), ("description", description)] {
            sqlx::query(
                r#"
                INSERT INTO category_settings (owner_id, setting_name, setting_value, locale)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(category.id)
            .bind(name)
            .bind(value)
            .bind(DEFAULT_LOCALE)
            .execute(&mut *tx)
            .await?;
            settings.insert(name.to_string(), value.to_string());
        }

        tx.commit().await?;
        timer.record();
        Ok(CategoryWithSettings { category, settings })
    }

    /// Deletes a category and its settings rows in one transaction.
    ///
    /// Returns false if no category with the given id exists.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_category");
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM category_settings WHERE owner_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }
}
