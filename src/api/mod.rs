//! # API Layer
//!
//! External interfaces. The only surface is the REST API.

pub mod rest;
