//! Audit HTTP adapter - REST API for the quick gender audit.
//!
//! Provides endpoints for:
//! - Describing the rating form
//! - Evaluating a submission

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::AuditAppState;
pub use routes::audit_router;
