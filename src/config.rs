//! # Configuration
//!
//! Runtime configuration, sourced from `RESTAURANT_API_*` environment
//! variables with local-development defaults. The store connection string
//! and the allowed frontend origin are never embedded in code.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime configuration for the service.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Document store connection string.
    pub store_uri: String,
    /// Database holding the restaurant collection.
    pub store_database: String,
    /// Name of the restaurant collection.
    pub store_collection: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Frontend origin allowed by CORS, used verbatim.
    pub allowed_origin: String,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Variables are prefixed `RESTAURANT_API_`, e.g.
    /// `RESTAURANT_API_STORE_URI` or `RESTAURANT_API_ALLOWED_ORIGIN`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be deserialized.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("store_uri", "mongodb://localhost:27017")?
            .set_default("store_database", "sample_restaurants")?
            .set_default("store_collection", "restaurants")?
            .set_default("bind_addr", "0.0.0.0:8000")?
            .set_default("allowed_origin", "http://localhost:3000")?
            .add_source(Environment::with_prefix("RESTAURANT_API"))
            .build()?
            .try_deserialize()
    }
}
