//! Equity Workshop - Gender-Responsive Workplace Workshop Companion
//!
//! This crate serves the content and interactions of a gender-responsive
//! workplace training session: an introduction, a reflection checklist,
//! case studies with group responses, a commitment wall, and the quick
//! gender audit, which scores five workplace dimensions and recommends
//! actions for the two weakest.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
