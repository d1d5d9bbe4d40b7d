//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dimensions, scores, errors)
//! - `audit` - Quick gender audit scoring and recommendations
//! - `workshop` - Introduction, reflections, case studies, and commitment wall

pub mod audit;
pub mod foundation;
pub mod workshop;
