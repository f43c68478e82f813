//! # Restaurant Query Service
//!
//! The single use case of the system: translate query parameters into a
//! store filter, fetch matching documents, attach the derived rating, sort
//! in memory, and hand the result back to the API layer.
//!
//! Parameter handling is permissive by design: unknown sort fields disable
//! sorting, any order other than `desc` sorts ascending, and limits that do
//! not parse as a positive integer fall back to the default. Nothing here
//! rejects a request.

use crate::application::error::ApplicationResult;
use crate::domain::RatedRestaurant;
use crate::infrastructure::persistence::{DistinctField, RestaurantFilter, RestaurantStore};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Default number of documents fetched when no usable limit is given.
pub const DEFAULT_LIMIT: i64 = 15;

/// Sort key for the restaurant listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Sort by the derived average rating (the default).
    AverageRating,
    /// Sort by case-folded name.
    Name,
    /// Leave results in store-native order.
    Unsorted,
}

impl SortField {
    /// Resolves the `sort_by` parameter.
    ///
    /// Absent defaults to [`SortField::AverageRating`]; any unrecognized
    /// value disables sorting rather than erroring.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("average_rating") => Self::AverageRating,
            Some("name") => Self::Name,
            Some(_) => Self::Unsorted,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AverageRating => write!(f, "average_rating"),
            Self::Name => write!(f, "name"),
            Self::Unsorted => write!(f, "unsorted"),
        }
    }
}

/// Sort direction for the restaurant listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (the default).
    Desc,
}

impl SortOrder {
    /// Resolves the `order` parameter.
    ///
    /// Descending only when the value is exactly `desc`; any other explicit
    /// value sorts ascending. Absent defaults to descending.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("desc") => Self::Desc,
            Some(_) => Self::Asc,
        }
    }

    /// Returns true for descending order.
    #[inline]
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Resolved listing query, built permissively from raw query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Sort key.
    pub sort_field: SortField,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Maximum number of documents fetched from the store.
    pub limit: i64,
    /// Optional cuisine substring restriction.
    pub cuisine: Option<String>,
    /// Optional exact borough restriction.
    pub borough: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort_field: SortField::AverageRating,
            sort_order: SortOrder::Desc,
            limit: DEFAULT_LIMIT,
            cuisine: None,
            borough: None,
        }
    }
}

impl ListQuery {
    /// Builds a query from raw parameter strings.
    ///
    /// Limits that fail to parse or are not positive fall back to
    /// [`DEFAULT_LIMIT`]. Empty filter strings impose no restriction.
    #[must_use]
    pub fn from_params(
        sort_by: Option<&str>,
        order: Option<&str>,
        limit: Option<&str>,
        filter_cuisine: Option<String>,
        filter_borough: Option<String>,
    ) -> Self {
        Self {
            sort_field: SortField::from_param(sort_by),
            sort_order: SortOrder::from_param(order),
            limit: limit
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_LIMIT),
            cuisine: filter_cuisine.filter(|s| !s.is_empty()),
            borough: filter_borough.filter(|s| !s.is_empty()),
        }
    }

    fn filter(&self) -> RestaurantFilter {
        RestaurantFilter {
            cuisine_contains: self.cuisine.clone(),
            borough: self.borough.clone(),
        }
    }
}

/// Read-only query service over the restaurant collection.
#[derive(Debug, Clone)]
pub struct RestaurantQueryService {
    store: Arc<dyn RestaurantStore>,
}

impl RestaurantQueryService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    /// Lists restaurants matching the query, each with its derived rating,
    /// sorted per the query.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Query` if the store query fails.
    pub async fn list(&self, query: &ListQuery) -> ApplicationResult<Vec<RatedRestaurant>> {
        let documents = self.store.find(&query.filter(), query.limit).await?;
        let mut rated: Vec<RatedRestaurant> =
            documents.into_iter().map(RatedRestaurant::new).collect();
        sort_restaurants(&mut rated, query.sort_field, query.sort_order);
        tracing::debug!(
            count = rated.len(),
            sort_field = %query.sort_field,
            sort_order = %query.sort_order,
            "listed restaurants"
        );
        Ok(rated)
    }

    /// Lists the distinct cuisines, excluding values containing `/`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Query` if the store query fails.
    pub async fn cuisines(&self) -> ApplicationResult<Vec<String>> {
        let values = self.store.distinct(DistinctField::Cuisine).await?;
        Ok(exclude_slashes(values))
    }

    /// Lists the distinct boroughs, excluding values containing `/`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Query` if the store query fails.
    pub async fn boroughs(&self) -> ApplicationResult<Vec<String>> {
        let values = self.store.distinct(DistinctField::Borough).await?;
        Ok(exclude_slashes(values))
    }
}

/// Drops values containing a `/`.
fn exclude_slashes(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.contains('/')).collect()
}

/// Sorts in place per the requested field and direction.
///
/// The sort is stable and the direction is applied by flipping the
/// comparator, so documents with equal keys keep their store order either
/// way.
fn sort_restaurants(rated: &mut [RatedRestaurant], field: SortField, order: SortOrder) {
    let compare: fn(&RatedRestaurant, &RatedRestaurant) -> Ordering = match field {
        SortField::AverageRating => |a, b| {
            a.average_rating
                .partial_cmp(&b.average_rating)
                .unwrap_or(Ordering::Equal)
        },
        SortField::Name => |a, b| a.restaurant.name_folded().cmp(&b.restaurant.name_folded()),
        SortField::Unsorted => return,
    };
    if order.is_descending() {
        rated.sort_by(|a, b| compare(a, b).reverse());
    } else {
        rated.sort_by(compare);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::Restaurant;
    use crate::infrastructure::persistence::InMemoryRestaurantStore;
    use proptest::prelude::*;

    fn service(store: InMemoryRestaurantStore) -> RestaurantQueryService {
        RestaurantQueryService::new(Arc::new(store))
    }

    async fn seeded_store() -> InMemoryRestaurantStore {
        let store = InMemoryRestaurantStore::new();
        store
            .insert(
                Restaurant::new("r-1")
                    .with_name("beta diner")
                    .with_cuisine("Italian Fusion")
                    .with_borough("Queens")
                    .with_scores(&[10.0, 20.0]),
            )
            .await;
        store
            .insert(
                Restaurant::new("r-2")
                    .with_name("Alpha Cafe")
                    .with_cuisine("Mexican")
                    .with_borough("Bronx")
                    .with_scores(&[30.0]),
            )
            .await;
        store
            .insert(
                Restaurant::new("r-3")
                    .with_name("Gamma Grill")
                    .with_cuisine("Cafe/Bakery")
                    .with_borough("Bronx"),
            )
            .await;
        store
    }

    mod params {
        use super::*;

        #[test]
        fn defaults_when_absent() {
            let query = ListQuery::from_params(None, None, None, None, None);
            assert_eq!(query, ListQuery::default());
        }

        #[test]
        fn unknown_sort_field_disables_sorting() {
            assert_eq!(SortField::from_param(Some("price")), SortField::Unsorted);
        }

        #[test]
        fn only_exact_desc_sorts_descending() {
            assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::Desc);
            assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Asc);
            assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Asc);
            assert_eq!(SortOrder::from_param(None), SortOrder::Desc);
        }

        #[test]
        fn malformed_or_non_positive_limit_falls_back() {
            for raw in ["abc", "0", "-3", "1.5", ""] {
                let query = ListQuery::from_params(None, None, Some(raw), None, None);
                assert_eq!(query.limit, DEFAULT_LIMIT, "limit={raw}");
            }
        }

        #[test]
        fn valid_limit_is_used() {
            let query = ListQuery::from_params(None, None, Some("3"), None, None);
            assert_eq!(query.limit, 3);
        }

        #[test]
        fn empty_filter_strings_impose_no_restriction() {
            let query =
                ListQuery::from_params(None, None, None, Some(String::new()), Some(String::new()));
            assert!(query.cuisine.is_none());
            assert!(query.borough.is_none());
        }
    }

    #[tokio::test]
    async fn default_listing_sorts_by_rating_descending() {
        let svc = service(seeded_store().await);
        let listed = svc.list(&ListQuery::default()).await.unwrap();

        let ratings: Vec<f64> = listed.iter().map(|r| r.average_rating).collect();
        assert_eq!(ratings, vec![30.0, 15.0, 0.0]);
    }

    #[tokio::test]
    async fn name_sort_is_case_folded() {
        let query = ListQuery::from_params(Some("name"), Some("asc"), None, None, None);
        let svc = service(seeded_store().await);
        let listed = svc.list(&query).await.unwrap();

        let names: Vec<&str> = listed
            .iter()
            .filter_map(|r| r.restaurant.name.as_deref())
            .collect();
        // "beta diner" sorts between "Alpha Cafe" and "Gamma Grill" only if
        // comparison is case-folded.
        assert_eq!(names, vec!["Alpha Cafe", "beta diner", "Gamma Grill"]);
    }

    #[tokio::test]
    async fn unknown_sort_field_keeps_store_order() {
        let query = ListQuery::from_params(Some("price"), None, None, None, None);
        let svc = service(seeded_store().await);
        let listed = svc.list(&query).await.unwrap();

        let ids: Vec<&str> = listed.iter().map(|r| r.restaurant.id.as_str()).collect();
        assert_eq!(ids, vec!["r-1", "r-2", "r-3"]);
    }

    #[tokio::test]
    async fn filters_are_forwarded_to_the_store() {
        let query = ListQuery::from_params(None, None, None, Some("ITALIAN".into()), None);
        let svc = service(seeded_store().await);
        let listed = svc.list(&query).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed.first().unwrap().restaurant.id, "r-1");
    }

    #[tokio::test]
    async fn limit_caps_the_listing() {
        let query = ListQuery::from_params(None, None, Some("2"), None, None);
        let svc = service(seeded_store().await);
        let listed = svc.list(&query).await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn cuisines_exclude_compound_values() {
        let svc = service(seeded_store().await);
        let cuisines = svc.cuisines().await.unwrap();
        assert_eq!(cuisines, vec!["Italian Fusion", "Mexican"]);
        assert!(cuisines.iter().all(|c| !c.contains('/')));
    }

    #[tokio::test]
    async fn boroughs_are_distinct_in_store_order() {
        let svc = service(seeded_store().await);
        let boroughs = svc.boroughs().await.unwrap();
        assert_eq!(boroughs, vec!["Queens", "Bronx"]);
    }

    #[test]
    fn descending_sort_keeps_store_order_for_ties() {
        let mut rated: Vec<RatedRestaurant> = ["r-1", "r-2", "r-3"]
            .iter()
            .map(|id| RatedRestaurant::new(Restaurant::new(*id).with_scores(&[10.0])))
            .collect();
        sort_restaurants(&mut rated, SortField::AverageRating, SortOrder::Desc);
        let ids: Vec<&str> = rated.iter().map(|r| r.restaurant.id.as_str()).collect();
        assert_eq!(ids, vec!["r-1", "r-2", "r-3"]);
    }

    proptest! {
        #[test]
        fn rating_sort_is_monotonic(score_lists in proptest::collection::vec(
            proptest::collection::vec(0.0f64..50.0, 0..6),
            0..12,
        )) {
            let mut rated: Vec<RatedRestaurant> = score_lists
                .iter()
                .enumerate()
                .map(|(i, scores)| {
                    RatedRestaurant::new(Restaurant::new(format!("r-{i}")).with_scores(scores))
                })
                .collect();

            sort_restaurants(&mut rated, SortField::AverageRating, SortOrder::Desc);
            for pair in rated.windows(2) {
                prop_assert!(pair[0].average_rating >= pair[1].average_rating);
            }

            sort_restaurants(&mut rated, SortField::AverageRating, SortOrder::Asc);
            for pair in rated.windows(2) {
                prop_assert!(pair[0].average_rating <= pair[1].average_rating);
            }
        }
    }
}
