//! # In-Memory Store
//!
//! In-memory implementation of [`RestaurantStore`] for testing.
//!
//! Documents live in a thread-safe `Vec`, preserving insertion order as the
//! store-native order. Filter semantics mirror the MongoDB implementation:
//! case-insensitive substring on cuisine, exact match on borough.

use crate::domain::Restaurant;
use crate::infrastructure::persistence::traits::{
    DistinctField, RestaurantFilter, RestaurantStore, StoreResult,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`RestaurantStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRestaurantStore {
    documents: Arc<RwLock<Vec<Restaurant>>>,
}

impl InMemoryRestaurantStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document. Insertion order is the store-native order.
    pub async fn insert(&self, restaurant: Restaurant) {
        let mut documents = self.documents.write().await;
        documents.push(restaurant);
    }

    /// Returns the number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all documents.
    pub async fn clear(&self) {
        let mut documents = self.documents.write().await;
        documents.clear();
    }

    fn matches(filter: &RestaurantFilter, restaurant: &Restaurant) -> bool {
        if let Some(text) = &filter.cuisine_contains {
            let needle = text.to_lowercase();
            let matched = restaurant
                .cuisine
                .as_deref()
                .is_some_and(|cuisine| cuisine.to_lowercase().contains(&needle));
            if !matched {
                return false;
            }
        }
        if let Some(borough) = &filter.borough {
            if restaurant.borough.as_deref() != Some(borough.as_str()) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn find(&self, filter: &RestaurantFilter, limit: i64) -> StoreResult<Vec<Restaurant>> {
        let documents = self.documents.read().await;
        let capped = usize::try_from(limit).unwrap_or(0);
        Ok(documents
            .iter()
            .filter(|r| Self::matches(filter, r))
            .take(capped)
            .cloned()
            .collect())
    }

    async fn distinct(&self, field: DistinctField) -> StoreResult<Vec<String>> {
        let documents = self.documents.read().await;
        let mut values: Vec<String> = Vec::new();
        for restaurant in documents.iter() {
            let value = match field {
                DistinctField::Cuisine => restaurant.cuisine.as_deref(),
                DistinctField::Borough => restaurant.borough.as_deref(),
            };
            if let Some(value) = value {
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
        }
        Ok(values)
    }
}
