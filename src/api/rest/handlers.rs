//! # REST Handlers
//!
//! Request handlers for the three endpoints.
//!
//! All parameters are deserialized as optional strings and resolved
//! permissively in the application layer, so a malformed `limit` or
//! `sort_by` never produces a client error. The only failure mode is a
//! store failure, which surfaces as HTTP 500 with a `detail` message.

use crate::application::{ApplicationError, ListQuery, RestaurantQueryService};
use crate::domain::RatedRestaurant;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query service over the restaurant collection.
    pub restaurants: RestaurantQueryService,
}

impl AppState {
    /// Creates the handler state.
    #[must_use]
    pub fn new(restaurants: RestaurantQueryService) -> Self {
        Self { restaurants }
    }
}

/// Query parameters accepted by the listing endpoint. All optional.
#[derive(Debug, Default, Deserialize)]
pub struct ListRestaurantsParams {
    /// Sort key: `average_rating` (default) or `name`.
    pub sort_by: Option<String>,
    /// Sort direction: descending only for the exact value `desc`.
    pub order: Option<String>,
    /// Maximum number of documents fetched, default 15.
    pub limit: Option<String>,
    /// Case-insensitive cuisine substring filter.
    pub filter_cuisine: Option<String>,
    /// Exact borough filter.
    pub filter_borough: Option<String>,
}

impl ListRestaurantsParams {
    fn into_query(self) -> ListQuery {
        ListQuery::from_params(
            self.sort_by.as_deref(),
            self.order.as_deref(),
            self.limit.as_deref(),
            self.filter_cuisine,
            self.filter_borough,
        )
    }
}

/// JSON error body returned for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub detail: String,
}

/// Translates application failures into HTTP responses.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        let body = Json(ErrorResponse {
            detail: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// `GET /api/restaurants` - filtered, rated and sorted listing.
pub async fn list_restaurants(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListRestaurantsParams>,
) -> Result<Json<Vec<RatedRestaurant>>, ApiError> {
    let query = params.into_query();
    let restaurants = state.restaurants.list(&query).await?;
    Ok(Json(restaurants))
}

/// `GET /api/cuisines` - distinct cuisines without compound values.
pub async fn list_cuisines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let cuisines = state.restaurants.cuisines().await?;
    Ok(Json(cuisines))
}

/// `GET /api/boroughs` - distinct boroughs without compound values.
pub async fn list_boroughs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let boroughs = state.restaurants.boroughs().await?;
    Ok(Json(boroughs))
}
