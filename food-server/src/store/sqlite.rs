//! SQLite Restaurant Store
//!
//! Every `add` is a single autocommitted INSERT; there is no batching and no
//! transaction spanning calls.

use async_trait::async_trait;
use shared::models::{Restaurant, RestaurantCreate};
use sqlx::SqlitePool;

use super::{RestaurantStore, StoreError, StoreResult, check_name};

/// Relational store backed by a sqlx pool
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RestaurantStore for SqliteStore {
    async fn get_all(&self) -> StoreResult<Vec<Restaurant>> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, cuisine FROM restaurant ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(restaurants)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Restaurant>> {
        let restaurant =
            sqlx::query_as::<_, Restaurant>("SELECT id, name, cuisine FROM restaurant WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(restaurant)
    }

    async fn add(&self, data: RestaurantCreate) -> StoreResult<Restaurant> {
        check_name(&data.name)?;

        let id = sqlx::query("INSERT INTO restaurant (name, cuisine) VALUES (?, ?)")
            .bind(&data.name)
            .bind(data.cuisine)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(id, name = %data.name, "Restaurant inserted");

        self.get(id)
            .await?
            .ok_or_else(|| StoreError::Database(format!("Restaurant {id} missing after insert")))
    }

    fn kind(&self) -> &'static str {
        "sqlite"
    }
}
