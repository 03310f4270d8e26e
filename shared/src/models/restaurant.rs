//! Restaurant Model

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

/// Maximum restaurant name length (chars)
pub const MAX_RESTAURANT_NAME_LEN: usize = 80;

/// Cuisine enum
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CuisineType {
    #[default]
    None,
    Italian,
    French,
    Japanese,
    American,
    Chinese,
    Mexican,
}

impl CuisineType {
    /// All cuisines, in drop-down order
    pub const ALL: [CuisineType; 7] = [
        CuisineType::None,
        CuisineType::Italian,
        CuisineType::French,
        CuisineType::Japanese,
        CuisineType::American,
        CuisineType::Chinese,
        CuisineType::Mexican,
    ];

    /// Wire value, identical to the serde / database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::None => "NONE",
            CuisineType::Italian => "ITALIAN",
            CuisineType::French => "FRENCH",
            CuisineType::Japanese => "JAPANESE",
            CuisineType::American => "AMERICAN",
            CuisineType::Chinese => "CHINESE",
            CuisineType::Mexican => "MEXICAN",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            CuisineType::None => "None",
            CuisineType::Italian => "Italian",
            CuisineType::French => "French",
            CuisineType::Japanese => "Japanese",
            CuisineType::American => "American",
            CuisineType::Chinese => "Chinese",
            CuisineType::Mexican => "Mexican",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    /// Store-assigned, immutable
    pub id: i64,
    pub name: String,
    pub cuisine: CuisineType,
}

/// Create restaurant payload (HTML form / JSON body)
///
/// Carries only user-editable fields; `id` is always assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RestaurantCreate {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 80, message = "Restaurant Name must be between 1 and 80 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    #[serde(default)]
    pub cuisine: CuisineType,
}

impl RestaurantCreate {
    pub fn new(name: impl Into<String>, cuisine: CuisineType) -> Self {
        Self {
            name: name.into(),
            cuisine,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("Restaurant Name is required")));
    }
    Ok(())
}
