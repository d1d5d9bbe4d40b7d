//! Audit Module - The quick gender audit.
//!
//! Pure, stateless scoring of a five-dimension self-assessment. Each
//! submission is evaluated from scratch; nothing is stored between calls.
//!
//! # Components
//!
//! - `AuditScorer` - Validates ratings, computes the average, picks focus areas
//! - `RecommendationCatalog` - Fixed improvement actions per dimension
//! - `ScoreChart` - Bar chart view model for rendering results

mod catalog;
mod chart;
mod scorer;

pub use catalog::{RecommendationCatalog, Recommendations, RECOMMENDATIONS_PER_DIMENSION};
pub use chart::{ChartBar, ScoreChart, CHART_Y_LIMIT};
pub use scorer::{
    AuditError, AuditResult, AuditScorer, AuditSubmission, DimensionScore, FocusArea,
    SubmittedRating, FOCUS_AREA_COUNT,
};
