//! AuditDimension enum representing the 5 quick gender audit dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 5 dimensions a workplace is rated on in the quick gender audit.
///
/// Declaration order is significant: it is the canonical order used for
/// display and for breaking ties between equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditDimension {
    Leadership,
    Recruitment,
    Environment,
    WorkLife,
    Resources,
}

impl AuditDimension {
    /// Number of audit dimensions.
    pub const COUNT: usize = 5;

    /// Returns all dimensions in canonical order.
    pub fn all() -> &'static [AuditDimension; Self::COUNT] {
        &[
            AuditDimension::Leadership,
            AuditDimension::Recruitment,
            AuditDimension::Environment,
            AuditDimension::WorkLife,
            AuditDimension::Resources,
        ]
    }

    /// Returns the 0-based index of this dimension in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            AuditDimension::Leadership => 0,
            AuditDimension::Recruitment => 1,
            AuditDimension::Environment => 2,
            AuditDimension::WorkLife => 3,
            AuditDimension::Resources => 4,
        }
    }

    /// Returns the short label used in charts and results.
    pub fn label(&self) -> &'static str {
        match self {
            AuditDimension::Leadership => "Leadership",
            AuditDimension::Recruitment => "Recruitment",
            AuditDimension::Environment => "Environment",
            AuditDimension::WorkLife => "Work-Life",
            AuditDimension::Resources => "Resources",
        }
    }

    /// Returns the full title shown next to the rating input.
    pub fn title(&self) -> &'static str {
        match self {
            AuditDimension::Leadership => "Leadership & Decision-Making",
            AuditDimension::Recruitment => "Recruitment & Promotion Practices",
            AuditDimension::Environment => "Work Environment & Culture",
            AuditDimension::WorkLife => "Work-Life Balance Support",
            AuditDimension::Resources => "Resource Allocation & Opportunities",
        }
    }

    /// Returns the hint describing what to consider when rating.
    pub fn help_text(&self) -> &'static str {
        match self {
            AuditDimension::Leadership => {
                "Consider gender balance in leadership positions and decision-making processes"
            }
            AuditDimension::Recruitment => {
                "Consider gender fairness in hiring, promotion, and career advancement"
            }
            AuditDimension::Environment => {
                "Consider gender bias, harassment policies, and inclusive culture"
            }
            AuditDimension::WorkLife => {
                "Consider parental leave, flexible work, and caregiving accommodations"
            }
            AuditDimension::Resources => {
                "Consider equitable access to funding, equipment, and professional development"
            }
        }
    }

    /// Returns the bar colour used when charting this dimension.
    pub fn chart_color(&self) -> &'static str {
        match self {
            AuditDimension::Leadership => "#1976D2",
            AuditDimension::Recruitment => "#2E7D32",
            AuditDimension::Environment => "#7B1FA2",
            AuditDimension::WorkLife => "#C62828",
            AuditDimension::Resources => "#F57F17",
        }
    }

    /// Returns the snake_case key used in request payloads.
    pub fn key(&self) -> &'static str {
        match self {
            AuditDimension::Leadership => "leadership",
            AuditDimension::Recruitment => "recruitment",
            AuditDimension::Environment => "environment",
            AuditDimension::WorkLife => "work_life",
            AuditDimension::Resources => "resources",
        }
    }
}

impl fmt::Display for AuditDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
