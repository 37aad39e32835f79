pub mod migrate;
pub mod operations;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::migrate::MigrationError;

#[derive(Debug, Error)]
pub enum DbInitError {
    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] MigrationError),
}

/// Cloneable handle over the connection pool, injected into `AppState`.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connects to `url`, creating the file on first run, and brings the
    /// schema up to date before returning.
    pub async fn connect(url: &str) -> Result<Self, DbInitError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(DbInitError::InvalidUrl)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        // A pooled in-memory database would hand every connection its own
        // empty store, so collapse the pool to one connection there.
        let max_connections = if url.contains(":memory:") || url.contains("mode=memory") {
            1
        } else {
            10
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(DbInitError::Connect)?;

        migrate::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
