//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod restaurant;

// Re-exports
pub use restaurant::*;
