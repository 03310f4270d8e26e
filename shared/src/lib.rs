//! Shared types for OdeToFood
//!
//! Domain models used by the server crate, its HTML views and its JSON API.

pub mod models;

// Re-exports
pub use models::{CuisineType, Restaurant, RestaurantCreate};
pub use serde::{Deserialize, Serialize};
