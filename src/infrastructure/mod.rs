//! # Infrastructure Layer
//!
//! Adapters to external systems. The only collaborator is the restaurant
//! document store, reached through the [`persistence`] port.

pub mod persistence;
