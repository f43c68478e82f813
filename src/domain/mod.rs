//! # Domain Model
//!
//! The restaurant document model and its derived values.
//!
//! - [`Restaurant`]: loosely-typed restaurant document
//! - [`Grade`]: single inspection grade
//! - [`RatedRestaurant`]: document with the derived `average_rating` attached

pub mod restaurant;

pub use restaurant::{Grade, RatedRestaurant, Restaurant};
