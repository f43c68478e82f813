//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /api/restaurants` - filtered/sorted listing with derived ratings
//! - `GET /api/cuisines` - distinct cuisines
//! - `GET /api/boroughs` - distinct boroughs
//!
//! # Usage
//!
//! ```ignore
//! use restaurant_api::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(service));
//! let router = create_router(state, "http://localhost:3000".parse()?);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, ErrorResponse, ListRestaurantsParams};
pub use routes::create_router;
