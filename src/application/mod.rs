//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations. Following CQRS, it separates
//! command handlers (participant input) from query handlers (static content).

pub mod handlers;

pub use handlers::{
    EvaluateAuditCommand, EvaluateAuditHandler, EvaluateAuditResult, GetAuditFormHandler,
    GetAuditFormQuery,
};
