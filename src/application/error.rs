//! # Application Errors
//!
//! Error types for the application layer.
//!
//! The taxonomy is deliberately small. Query execution failures are the only
//! recoverable kind and surface at the request boundary as HTTP 500.
//! Startup connectivity failures are fatal and handled in `main` before the
//! server starts; they never reach a handler.
//!
//! Malformed query parameters are not errors at all: they fall back to
//! permissive defaults in [`crate::application::services`].

use crate::infrastructure::persistence::StoreError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A store query failed while serving a request.
    #[error("query execution failed: {0}")]
    Query(#[from] StoreError),
}

impl ApplicationError {
    /// Returns true if the failure was reaching the store at all, rather
    /// than executing the query.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Query(store) => store.is_connection(),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_carries_store_message() {
        let err: ApplicationError = StoreError::query("cursor exhausted").into();
        assert!(err.to_string().contains("query execution failed"));
        assert!(err.to_string().contains("cursor exhausted"));
        assert!(!err.is_connection());
    }

    #[test]
    fn connection_failures_are_flagged() {
        let err: ApplicationError = StoreError::connection("no route to host").into();
        assert!(err.is_connection());
    }
}
