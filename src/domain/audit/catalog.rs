//! Recommendation catalog - fixed improvement actions per audit dimension.

use crate::domain::foundation::AuditDimension;

/// Number of recommendations listed for every dimension.
pub const RECOMMENDATIONS_PER_DIMENSION: usize = 3;

/// A fixed, ordered list of recommendations for one dimension.
pub type Recommendations = [&'static str; RECOMMENDATIONS_PER_DIMENSION];

const LEADERSHIP: Recommendations = [
    "Establish clear, objective criteria for leadership selection",
    "Create mentoring programs that connect women with leadership opportunities",
    "Review decision-making processes for inclusivity",
];

const RECRUITMENT: Recommendations = [
    "Implement blind resume screening where possible",
    "Train hiring committees on recognizing implicit bias",
    "Standardize interview questions and evaluation metrics",
];

const ENVIRONMENT: Recommendations = [
    "Develop and enforce clear anti-harassment policies",
    "Create channels for reporting bias or discrimination",
    "Provide regular gender sensitivity training",
];

const WORK_LIFE: Recommendations = [
    "Review flexible work policies for accessibility to all genders",
    "Normalize parental leave for all parents",
    "Consider caregiving responsibilities in meeting and travel schedules",
];

const RESOURCES: Recommendations = [
    "Audit resource allocation patterns by gender",
    "Create transparent processes for equipment and funding requests",
    "Ensure equal access to professional development opportunities",
];

/// Read-only mapping from audit dimension to its improvement actions.
pub struct RecommendationCatalog;

impl RecommendationCatalog {
    /// Returns the recommendations for a dimension.
    ///
    /// Total over the closed dimension set, so every focus area is
    /// guaranteed exactly three actions.
    pub fn for_dimension(dimension: AuditDimension) -> &'static Recommendations {
        match dimension {
            AuditDimension::Leadership => &LEADERSHIP,
            AuditDimension::Recruitment => &RECRUITMENT,
            AuditDimension::Environment => &ENVIRONMENT,
            AuditDimension::WorkLife => &WORK_LIFE,
            AuditDimension::Resources => &RESOURCES,
        }
    }
}
