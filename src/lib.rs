//! # Restaurant API
//!
//! Read-only HTTP query service over a restaurant document collection,
//! serving a single frontend consumer.
//!
//! Three endpoints: a filtered/sorted listing with a derived per-document
//! `average_rating`, and distinct-values lookups for cuisines and boroughs.
//! The request pipeline is a straight line: query parameters become a store
//! filter, matching documents are fetched with a limit, the derived rating
//! is attached, results are sorted in memory and serialized to JSON.
//!
//! # Layers
//!
//! - [`domain`]: the loosely-typed restaurant document and derived rating
//! - [`application`]: the query service and permissive parameter handling
//! - [`infrastructure`]: the store port with MongoDB and in-memory backends
//! - [`api`]: axum handlers, routing and CORS
//! - [`config`]: environment-sourced runtime configuration

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
