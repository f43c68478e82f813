//! # Router Construction
//!
//! Assembles the axum router with CORS and request tracing.
//!
//! CORS allows the single configured frontend origin with credentials.
//! Because credentialed responses may not use wildcards, methods and
//! headers mirror the request, which is the credentials-safe equivalent of
//! allowing all. The origin value is used verbatim, trailing slash and all.

use crate::api::rest::handlers::{self, AppState};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// All routes live under `/api`. The same router is used by the binary and
/// by the integration tests, which drive it without a listener.
#[must_use]
pub fn create_router(state: Arc<AppState>, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/api/restaurants", get(handlers::list_restaurants))
        .route("/api/cuisines", get(handlers::list_cuisines))
        .route("/api/boroughs", get(handlers::list_boroughs))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
