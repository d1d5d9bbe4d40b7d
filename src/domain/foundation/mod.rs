//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the workshop domain.

mod audit_dimension;
mod audit_score;
mod errors;

pub use audit_dimension::AuditDimension;
pub use audit_score::AuditScore;
pub use errors::{DomainError, ErrorCode, ValidationError};
