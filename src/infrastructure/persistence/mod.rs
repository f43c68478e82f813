//! # Persistence Layer
//!
//! Store port and implementations.
//!
//! ## Port
//!
//! - [`RestaurantStore`]: read-only access to the restaurant collection
//!
//! ## Implementations
//!
//! - `mongo`: MongoDB-backed store used in production
//! - `in_memory`: in-memory store for tests

pub mod in_memory;
pub mod mongo;
pub mod traits;

pub use in_memory::InMemoryRestaurantStore;
pub use mongo::MongoRestaurantStore;
pub use traits::{DistinctField, RestaurantFilter, RestaurantStore, StoreError, StoreResult};
