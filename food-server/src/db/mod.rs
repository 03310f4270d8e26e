//! Database Module
//!
//! Handles SQLite connection pool and migrations

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

use crate::utils::AppError;

/// Database service (owns the SQLite connection pool)
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database named by `url` and apply migrations
    ///
    /// File databases use WAL; `sqlite::memory:` is pinned to one connection,
    /// since every new connection would otherwise open an empty database.
    pub async fn new(url: &str) -> Result<Self, AppError> {
        let in_memory = url.contains(":memory:");

        let mut options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .pragma("foreign_keys", "ON")
            .busy_timeout(std::time::Duration::from_millis(5000));
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        let mut pool_options = SqlitePoolOptions::new().max_connections(5);
        if in_memory {
            // Keep the single connection alive for the pool's lifetime
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<std::time::Duration>)
                .max_lifetime(None::<std::time::Duration>);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(in_memory, "Database connection established (SQLite, busy_timeout=5000ms)");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Connectivity probe (`SELECT 1`)
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::database(e.to_string()))
    }
}
