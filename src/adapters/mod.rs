//! Adapters - Connections between the domain and the outside world.
//!
//! - `http` - Axum REST API serving the audit and workshop pages

pub mod http;
