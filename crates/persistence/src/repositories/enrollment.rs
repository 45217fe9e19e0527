//! Enrollment repository for database operations.
//!
//! Links user accounts to journal-scoped role groups. Groups are seeded at
//! journal creation; enrollment never creates accounts or groups.

use sqlx::PgPool;

use crate::entities::{EnrollmentRowEntity, UserAccountEntity, UserGroupEntity};
use crate::metrics::QueryTimer;

/// Repository for user enrollment database operations.
#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    /// Creates a new EnrollmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds a user account by email.
    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserAccountEntity>(
            r#"
            SELECT id, email, full_name
            FROM user_accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Finds the role group for a (journal, role) pair.
    pub async fn find_group(
        &self,
        journal_id: i64,
        role: &str,
    ) -> Result<Option<UserGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_group");
        let result = sqlx::query_as::<_, UserGroupEntity>(
            r#"
            SELECT id, journal_id, role
            FROM user_groups
            WHERE journal_id = $1 AND role = $2
            "#,
        )
        .bind(journal_id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Links a user to a role group. Enrolling twice is a no-op.
    pub async fn enroll(&self, user_id: i64, group_id: i64) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("enroll_user");
        sqlx::query(
            r#"
            INSERT INTO user_user_groups (user_id, user_group_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, user_group_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(group_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Lists a journal's enrollments with user details and role.
    pub async fn list(&self, journal_id: i64) -> Result<Vec<EnrollmentRowEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_enrollments");
        let result = sqlx::query_as::<_, EnrollmentRowEntity>(
            r#"
            SELECT u.id AS user_id, u.email, u.full_name, g.role
            FROM user_user_groups uug
            JOIN user_accounts u ON u.id = uug.user_id
            JOIN user_groups g ON g.id = uug.user_group_id
            WHERE g.journal_id = $1
            ORDER BY u.email, g.role
            "#,
        )
        .bind(journal_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
