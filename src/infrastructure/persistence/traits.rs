//! # Store Port
//!
//! Port definition for the restaurant document store.
//!
//! The service is strictly read-only and uses exactly three store
//! capabilities: a liveness ping, a filtered find-with-limit, and
//! distinct-values queries over two fields. Implementations can back this
//! with MongoDB or in-memory storage for tests.
//!
//! # Examples
//!
//! ```ignore
//! use restaurant_api::infrastructure::persistence::traits::{
//!     DistinctField, RestaurantFilter, RestaurantStore,
//! };
//!
//! async fn bronx_pizza(store: &impl RestaurantStore) {
//!     let filter = RestaurantFilter::new()
//!         .with_cuisine_contains("pizza")
//!         .with_borough("Bronx");
//!     let matches = store.find(&filter, 15).await.unwrap();
//!     let cuisines = store.distinct(DistinctField::Cuisine).await.unwrap();
//! }
//! ```

use crate::domain::Restaurant;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// A find or distinct query failed.
    #[error("query error: {0}")]
    Query(String),

    /// A document could not be decoded into the restaurant model.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl StoreError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a deserialization error.
    #[must_use]
    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }

    /// Returns true if this is a connection error.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Fields over which distinct values can be listed.
///
/// Closed set rather than a free-form field name, so handlers cannot query
/// arbitrary document fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistinctField {
    /// The `cuisine` field.
    Cuisine,
    /// The `borough` field.
    Borough,
}

impl DistinctField {
    /// Returns the document field name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cuisine => "cuisine",
            Self::Borough => "borough",
        }
    }
}

impl fmt::Display for DistinctField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-scoped filter over the restaurant collection.
///
/// Absent fields impose no restriction. The cuisine condition is a
/// case-insensitive literal substring match; the borough condition is an
/// exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    /// Case-insensitive substring the `cuisine` field must contain.
    pub cuisine_contains: Option<String>,
    /// Exact value the `borough` field must equal.
    pub borough: Option<String>,
}

impl RestaurantFilter {
    /// Creates an unrestricted filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to cuisines containing the given text, case-insensitively.
    #[must_use]
    pub fn with_cuisine_contains(mut self, text: impl Into<String>) -> Self {
        self.cuisine_contains = Some(text.into());
        self
    }

    /// Restricts to an exact borough.
    #[must_use]
    pub fn with_borough(mut self, borough: impl Into<String>) -> Self {
        self.borough = Some(borough.into());
        self
    }

    /// Returns true if the filter imposes no restriction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuisine_contains.is_none() && self.borough.is_none()
    }
}

/// Read-only access to the restaurant collection.
#[async_trait]
pub trait RestaurantStore: Send + Sync + fmt::Debug {
    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the store cannot be reached.
    async fn ping(&self) -> StoreResult<()>;

    /// Finds documents matching the filter, up to `limit`.
    ///
    /// The limit is applied at the store, before any post-processing.
    /// Result order is store-native.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Query` if the query fails and
    /// `StoreError::Deserialization` if a document cannot be decoded.
    async fn find(&self, filter: &RestaurantFilter, limit: i64) -> StoreResult<Vec<Restaurant>>;

    /// Lists the distinct values of the given field, in store order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Query` if the query fails.
    async fn distinct(&self, field: DistinctField) -> StoreResult<Vec<String>>;
}
