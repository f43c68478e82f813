//! # Application Services
//!
//! Use-case orchestration between the API layer and the store port.
//!
//! - [`RestaurantQueryService`]: the listing and distinct-values queries
//! - [`ListQuery`], [`SortField`], [`SortOrder`]: permissive query parameters

pub mod restaurant_query;

pub use restaurant_query::{
    ListQuery, RestaurantQueryService, SortField, SortOrder, DEFAULT_LIMIT,
};
