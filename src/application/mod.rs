//! # Application Layer
//!
//! Use cases and their error types.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{ListQuery, RestaurantQueryService, SortField, SortOrder};
