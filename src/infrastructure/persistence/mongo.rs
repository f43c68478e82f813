//! # MongoDB Store
//!
//! MongoDB-backed implementation of [`RestaurantStore`].
//!
//! The driver's client is internally pooled and cheap to clone, so a single
//! instance constructed at startup is shared across all requests. Filters
//! translate as:
//!
//! - cuisine: `$regex` with the input escaped so matching is literal
//!   substring, case-insensitive via `$options: "i"`
//! - borough: exact equality
//!
//! Documents come back as raw BSON and are converted through relaxed
//! extended JSON so unknown fields survive, with the `_id` rewritten to its
//! string form.

use crate::domain::Restaurant;
use crate::infrastructure::persistence::traits::{
    DistinctField, RestaurantFilter, RestaurantStore, StoreError, StoreResult,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};
use serde_json::Value;

/// MongoDB-backed [`RestaurantStore`].
#[derive(Debug, Clone)]
pub struct MongoRestaurantStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoRestaurantStore {
    /// Connects to the store and selects the configured collection.
    ///
    /// Construction does not verify reachability; call [`RestaurantStore::ping`]
    /// for the startup liveness check.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the connection string is invalid.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;
        let collection = client.database(database).collection::<Document>(collection);
        Ok(Self { client, collection })
    }

    /// Closes the underlying client. Called on graceful shutdown.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
    }

    fn build_filter(filter: &RestaurantFilter) -> Document {
        let mut query = Document::new();
        if let Some(cuisine) = &filter.cuisine_contains {
            query.insert(
                "cuisine",
                doc! { "$regex": regex::escape(cuisine), "$options": "i" },
            );
        }
        if let Some(borough) = &filter.borough {
            query.insert("borough", borough.clone());
        }
        query
    }

    fn document_to_restaurant(document: Document) -> StoreResult<Restaurant> {
        let id = document
            .get("_id")
            .map(bson_id_to_string)
            .unwrap_or_default();
        let mut value = Bson::Document(document).into_relaxed_extjson();
        if let Value::Object(fields) = &mut value {
            fields.insert("_id".to_string(), Value::String(id));
        }
        serde_json::from_value(value).map_err(|e| StoreError::deserialization(e.to_string()))
    }
}

/// Renders a document identifier as a string, matching how object ids are
/// shown to the frontend.
fn bson_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl RestaurantStore for MongoRestaurantStore {
    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;
        Ok(())
    }

    async fn find(&self, filter: &RestaurantFilter, limit: i64) -> StoreResult<Vec<Restaurant>> {
        let cursor = self
            .collection
            .find(Self::build_filter(filter))
            .limit(limit)
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;
        documents
            .into_iter()
            .map(Self::document_to_restaurant)
            .collect()
    }

    async fn distinct(&self, field: DistinctField) -> StoreResult<Vec<String>> {
        let values = self
            .collection
            .distinct(field.as_str(), doc! {})
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;
        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect())
    }
}
