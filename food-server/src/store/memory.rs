//! In-memory Restaurant Store
//!
//! Process-lifetime list, seeded at construction. Ids come from a sequence
//! held under the same lock as the list, so concurrent `add` never collides.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{CuisineType, Restaurant, RestaurantCreate};

use super::{RestaurantStore, StoreResult, check_name};

/// Seed records (ids 1..=5)
const SEED: [&str; 5] = [
    "Budd's Pizza",
    "Maggie's Soda Shoppe",
    "Elvis Burgers and Booze",
    "Nin Hao Happiness Chinese Food",
    "Guido's Authentic Italian",
];

#[derive(Debug)]
struct Inner {
    restaurants: Vec<Restaurant>,
    next_id: i64,
}

/// List-backed store, insertion order
#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Store seeded with the five sample restaurants
    pub fn new() -> Self {
        let restaurants = SEED
            .iter()
            .zip(1_i64..)
            .map(|(name, id)| Restaurant {
                id,
                name: (*name).to_string(),
                cuisine: CuisineType::None,
            })
            .collect();
        Self::from_records(restaurants)
    }

    /// Store without any records
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    /// Store holding the given records; the sequence continues after the highest id
    pub fn from_records(restaurants: Vec<Restaurant>) -> Self {
        let next_id = restaurants.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner {
                restaurants,
                next_id,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn get_all(&self) -> StoreResult<Vec<Restaurant>> {
        Ok(self.inner.read().restaurants.clone())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Restaurant>> {
        Ok(self
            .inner
            .read()
            .restaurants
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn add(&self, data: RestaurantCreate) -> StoreResult<Restaurant> {
        check_name(&data.name)?;

        let mut inner = self.inner.write();
        let restaurant = Restaurant {
            id: inner.next_id,
            name: data.name,
            cuisine: data.cuisine,
        };
        inner.next_id += 1;
        inner.restaurants.push(restaurant.clone());

        tracing::debug!(id = restaurant.id, name = %restaurant.name, "Restaurant added (memory)");
        Ok(restaurant)
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_with_five_records() {
        let store = InMemoryStore::new();
        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(
            all.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(all[0].name, "Budd's Pizza");
        assert!(all.iter().all(|r| r.cuisine == CuisineType::None));
    }

    #[tokio::test]
    async fn test_add_assigns_next_id() {
        let store = InMemoryStore::new();
        let added = store
            .add(RestaurantCreate::new("Test Cafe", CuisineType::None))
            .await
            .unwrap();
        assert_eq!(added.id, 6);
        assert_eq!(store.get_all().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_get_returns_added_record() {
        let store = InMemoryStore::new();
        let added = store
            .add(RestaurantCreate::new("Sushi Place", CuisineType::Japanese))
            .await
            .unwrap();
        let found = store.get(added.id).await.unwrap();
        assert_eq!(found, Some(added));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get(999).await.unwrap(), None);
        assert_eq!(store.get(0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let store = InMemoryStore::empty();
        for name in ["Zed's", "Alpha", "Mid"] {
            store
                .add(RestaurantCreate::new(name, CuisineType::None))
                .await
                .unwrap();
        }
        let names: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Zed's", "Alpha", "Mid"]);
    }

    #[tokio::test]
    async fn test_sequence_continues_after_highest_id() {
        let store = InMemoryStore::from_records(vec![Restaurant {
            id: 10,
            name: "Ten".into(),
            cuisine: CuisineType::French,
        }]);
        let added = store
            .add(RestaurantCreate::new("Eleven", CuisineType::None))
            .await
            .unwrap();
        assert_eq!(added.id, 11);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name() {
        let store = InMemoryStore::new();
        let result = store
            .add(RestaurantCreate::new("   ", CuisineType::None))
            .await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.len(), 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_get_unique_ids() {
        let store = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add(RestaurantCreate::new(format!("Place {i}"), CuisineType::None))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(store.get_all().await.unwrap().len(), 55);
        assert!(ids.iter().all(|id| (6..=55).contains(id)));
    }
}
