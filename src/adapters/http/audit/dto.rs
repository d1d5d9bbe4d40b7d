//! Data transfer objects for audit HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::EvaluateAuditResult;
use crate::domain::audit::{AuditSubmission, ScoreChart, SubmittedRating};
use crate::domain::foundation::AuditDimension;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to evaluate an audit.
///
/// Ratings may arrive in any order; each dimension must appear exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateAuditRequest {
    pub ratings: Vec<SubmittedRating>,
}

impl From<EvaluateAuditRequest> for AuditSubmission {
    fn from(request: EvaluateAuditRequest) -> Self {
        AuditSubmission::new(request.ratings)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// A single dimension's score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreView {
    pub dimension: AuditDimension,
    pub label: &'static str,
    pub value: u8,
}

/// A focus area and what to do about it.
#[derive(Debug, Clone, Serialize)]
pub struct FocusAreaView {
    pub dimension: AuditDimension,
    pub heading: String,
    pub score: u8,
    pub recommendations: Vec<&'static str>,
}

/// Response from evaluating an audit.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateAuditResponse {
    pub scores: Vec<ScoreView>,
    pub average: f64,
    pub average_display: String,
    pub overall_label: String,
    pub focus_areas: Vec<FocusAreaView>,
    pub chart: ScoreChart,
}

impl From<EvaluateAuditResult> for EvaluateAuditResponse {
    fn from(output: EvaluateAuditResult) -> Self {
        let result = output.result;

        let scores = result
            .scores()
            .iter()
            .map(|s| ScoreView {
                dimension: s.dimension,
                label: s.dimension.label(),
                value: s.value(),
            })
            .collect();

        let focus_areas = result
            .focus_areas()
            .iter()
            .map(|f| FocusAreaView {
                dimension: f.dimension,
                heading: f.heading(),
                score: f.score.value(),
                recommendations: f.recommendations.to_vec(),
            })
            .collect();

        Self {
            scores,
            average: result.average(),
            average_display: result.average_display(),
            overall_label: result.overall_label(),
            focus_areas,
            chart: output.chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_ratings_list() {
        let json = r#"{"ratings": [
            {"dimension": "leadership", "value": 4},
            {"dimension": "work_life", "value": 2}
        ]}"#;

        let request: EvaluateAuditRequest = serde_json::from_str(json).unwrap();
        let submission: AuditSubmission = request.into();
        assert_eq!(submission.ratings.len(), 2);
        assert_eq!(submission.ratings[1].dimension, AuditDimension::WorkLife);
    }

    #[test]
    fn request_rejects_unknown_dimension() {
        let json = r#"{"ratings": [{"dimension": "salary", "value": 4}]}"#;
        assert!(serde_json::from_str::<EvaluateAuditRequest>(json).is_err());
    }
}
