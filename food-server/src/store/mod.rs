//! Restaurant Store Module
//!
//! Read/write access to restaurant records behind one capability trait.
//!
//! | 实现 | 说明 |
//! |------|------|
//! | [`InMemoryStore`] | 进程内列表，构造时写入种子数据 |
//! | [`SqliteStore`] | SQLite (sqlx)，按名称排序 |

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use shared::models::{MAX_RESTAURANT_NAME_LEN, Restaurant, RestaurantCreate};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Restaurant store capability
///
/// `get` returning `Ok(None)` is the normal outcome for an unknown id.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// All records (store-defined order)
    async fn get_all(&self) -> StoreResult<Vec<Restaurant>>;

    /// Point lookup by id
    async fn get(&self, id: i64) -> StoreResult<Option<Restaurant>>;

    /// Assign a new id, persist and return the stored record
    async fn add(&self, data: RestaurantCreate) -> StoreResult<Restaurant>;

    /// Backend name (memory | sqlite)
    fn kind(&self) -> &'static str;
}

/// Name invariant shared by every backend: non-blank, at most 80 chars.
pub(crate) fn check_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("name must not be empty".into()));
    }
    let len = name.chars().count();
    if len > MAX_RESTAURANT_NAME_LEN {
        return Err(StoreError::Validation(format!(
            "name is too long ({len} chars, max {MAX_RESTAURANT_NAME_LEN})"
        )));
    }
    Ok(())
}
