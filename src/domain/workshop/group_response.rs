//! Group responses to a case study.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Warning shown when either part of the response is left blank.
pub const INCOMPLETE_RESPONSE_MESSAGE: &str =
    "Please enter both insights and proposed solutions before sharing.";

/// A group's insights and proposed solutions for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupResponse {
    case_id: u8,
    insights: String,
    proposed_solutions: String,
}

impl GroupResponse {
    /// Creates a response; both insights and solutions must be non-blank.
    pub fn new(
        case_id: u8,
        insights: impl Into<String>,
        proposed_solutions: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let insights = insights.into();
        let proposed_solutions = proposed_solutions.into();

        if insights.trim().is_empty() {
            return Err(ValidationError::empty_field("insights"));
        }
        if proposed_solutions.trim().is_empty() {
            return Err(ValidationError::empty_field("proposed_solutions"));
        }

        Ok(Self {
            case_id,
            insights,
            proposed_solutions,
        })
    }

    pub fn case_id(&self) -> u8 {
        self.case_id
    }

    pub fn insights(&self) -> &str {
        &self.insights
    }

    pub fn proposed_solutions(&self) -> &str {
        &self.proposed_solutions
    }
}

/// Confirmation returned after a response is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareAcknowledgement {
    pub heading: &'static str,
    pub message: &'static str,
}

impl ShareAcknowledgement {
    pub fn standard() -> Self {
        Self {
            heading: "Thank you for sharing your insights!",
            message: "Your contributions will be included in the workshop discussion. Be prepared to share key points with the larger group.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_response() {
        let response = GroupResponse::new(1, "Bias in criteria", "Objective rubric").unwrap();
        assert_eq!(response.case_id(), 1);
        assert_eq!(response.insights(), "Bias in criteria");
        assert_eq!(response.proposed_solutions(), "Objective rubric");
    }

    #[test]
    fn rejects_missing_insights() {
        let err = GroupResponse::new(1, "", "Objective rubric").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("insights"));
    }

    #[test]
    fn rejects_whitespace_only_solutions() {
        let err = GroupResponse::new(1, "Bias", "   \n").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("proposed_solutions"));
    }
}
