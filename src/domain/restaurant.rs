//! # Restaurant Document Model
//!
//! The restaurant record as stored in the document collection.
//!
//! The collection schema is not enforced by the store, so the model is
//! deliberately loose: the handful of fields the service actually reads
//! (`name`, `cuisine`, `borough`, `grades[].score` and the identifier) get
//! typed accessors, while every other field is carried opaquely and
//! round-trips to the JSON output unmodified.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single inspection grade attached to a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Numeric inspection score. Absent or null scores count as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Remaining grade fields (inspection date, letter grade), preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Grade {
    /// Creates a grade with the given score.
    #[must_use]
    pub fn new(score: f64) -> Self {
        Self {
            score: Some(score),
            extra: Map::new(),
        }
    }
}

/// A restaurant document.
///
/// Owned and persisted entirely by the external store; the service never
/// creates, mutates or deletes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Store-assigned identifier, always rendered as a string.
    #[serde(rename = "_id")]
    pub id: String,

    /// Restaurant name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Cuisine classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    /// Borough the restaurant is located in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borough: Option<String>,

    /// Inspection grades, newest first as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<Vec<Grade>>,

    /// All other document fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Restaurant {
    /// Creates a restaurant with the given identifier and no other fields.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            cuisine: None,
            borough: None,
            grades: None,
            extra: Map::new(),
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the cuisine.
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Sets the borough.
    #[must_use]
    pub fn with_borough(mut self, borough: impl Into<String>) -> Self {
        self.borough = Some(borough.into());
        self
    }

    /// Sets the grades from a list of scores.
    #[must_use]
    pub fn with_scores(mut self, scores: &[f64]) -> Self {
        self.grades = Some(scores.iter().copied().map(Grade::new).collect());
        self
    }

    /// Arithmetic mean of the grade scores.
    ///
    /// Returns `0.0` when `grades` is absent or empty. A grade whose score
    /// is missing contributes zero to the sum but still counts toward the
    /// divisor.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        match &self.grades {
            Some(grades) if !grades.is_empty() => {
                let sum: f64 = grades.iter().map(|g| g.score.unwrap_or(0.0)).sum();
                sum / grades.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Case-folded name for sorting. Nameless documents fold to the empty
    /// string and sort first.
    #[must_use]
    pub fn name_folded(&self) -> String {
        self.name.as_deref().unwrap_or("").to_lowercase()
    }
}

/// A restaurant with its derived average rating attached.
///
/// The rating is computed per request and never persisted. Serializes as the
/// original document plus an `average_rating` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedRestaurant {
    /// The underlying document, flattened into the output.
    #[serde(flatten)]
    pub restaurant: Restaurant,

    /// Derived mean of the grade scores.
    pub average_rating: f64,
}

impl RatedRestaurant {
    /// Attaches the derived rating to a restaurant.
    #[must_use]
    pub fn new(restaurant: Restaurant) -> Self {
        let average_rating = restaurant.average_rating();
        Self {
            restaurant,
            average_rating,
        }
    }
}
