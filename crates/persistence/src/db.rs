//! Database connection pool management.
//!
//! All repositories share one [`PgPool`]; handlers clone the pool handle,
//! not the connections. The pool is created once at startup from the
//! `[database]` section of the service configuration.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Connection pool settings, mirroring the `[database]` config section
/// (overridable via `JM__DATABASE__*` environment variables).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection URL.
    pub url: String,
    pub max_connections: u32,
    /// Connections kept open even when idle, so the first settings save
    /// after a quiet period does not pay connection setup.
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Creates the PostgreSQL connection pool for the journal database.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
}
