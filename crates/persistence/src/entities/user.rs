//! User account and role group entities (database row mappings).

use sqlx::FromRow;

/// Database row mapping for the user_accounts table.
#[derive(Debug, Clone, FromRow)]
pub struct UserAccountEntity {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

/// Database row mapping for the user_groups table (journal-scoped roles).
#[derive(Debug, Clone, FromRow)]
pub struct UserGroupEntity {
    pub id: i64,
    pub journal_id: i64,
    pub role: String,
}

/// Joined row for listing a journal's enrollments.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentRowEntity {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
}
