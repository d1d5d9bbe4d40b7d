//! Workshop HTTP adapter - REST API for the workshop pages.
//!
//! Provides endpoints for:
//! - Workshop details and introduction content
//! - The reflection checklist
//! - Case studies and group responses
//! - The commitment wall

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::WorkshopAppState;
pub use routes::workshop_router;
