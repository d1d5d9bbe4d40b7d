//! Data transfer objects for workshop HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ShareCaseResponseResult, SubmitCommitmentResult};
use crate::domain::workshop::{
    CaseStudy, CommitmentType, ReflectionStatement, ReflectionSummary, SampleCommitment,
    WorkshopInfo,
};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request carrying the reflection statements a participant ticked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReflectionRequest {
    #[serde(default)]
    pub selected: Vec<ReflectionStatement>,
}

/// Request to share a group's response to a case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareCaseResponseRequest {
    #[serde(default)]
    pub insights: String,
    #[serde(default)]
    pub proposed_solutions: String,
}

/// Request to add a commitment to the wall.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitCommitmentRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub commitment_type: CommitmentType,
    #[serde(default)]
    pub commitment: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Workshop details with the page footer.
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopInfoResponse {
    #[serde(flatten)]
    pub info: WorkshopInfo,
    pub footer: [String; 2],
}

impl From<WorkshopInfo> for WorkshopInfoResponse {
    fn from(info: WorkshopInfo) -> Self {
        let footer = info.footer();
        Self { info, footer }
    }
}

/// Reflection result; `summary` is null when nothing was selected.
#[derive(Debug, Clone, Serialize)]
pub struct ReflectionResponse {
    pub summary: Option<ReflectionSummary>,
}

/// Entry in the case study selector.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStudySummary {
    pub id: u8,
    pub label: String,
}

/// Response listing case studies.
#[derive(Debug, Clone, Serialize)]
pub struct ListCaseStudiesResponse {
    pub count: usize,
    pub cases: Vec<CaseStudySummary>,
}

impl From<&[CaseStudy]> for ListCaseStudiesResponse {
    fn from(cases: &[CaseStudy]) -> Self {
        let cases: Vec<_> = cases
            .iter()
            .map(|c| CaseStudySummary {
                id: c.id,
                label: c.label(),
            })
            .collect();
        Self {
            count: cases.len(),
            cases,
        }
    }
}

/// A case study with its selector label.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStudyResponse {
    pub label: String,
    #[serde(flatten)]
    pub case: CaseStudy,
}

impl From<&CaseStudy> for CaseStudyResponse {
    fn from(case: &CaseStudy) -> Self {
        Self {
            label: case.label(),
            case: case.clone(),
        }
    }
}

/// Acknowledgement of a shared group response.
#[derive(Debug, Clone, Serialize)]
pub struct ShareCaseResponseResponse {
    pub case_id: u8,
    pub heading: &'static str,
    pub message: &'static str,
}

impl From<ShareCaseResponseResult> for ShareCaseResponseResponse {
    fn from(result: ShareCaseResponseResult) -> Self {
        Self {
            case_id: result.response.case_id(),
            heading: result.acknowledgement.heading,
            message: result.acknowledgement.message,
        }
    }
}

/// A commitment as displayed on the wall.
#[derive(Debug, Clone, Serialize)]
pub struct CommitmentView {
    pub attribution: String,
    pub commitment: String,
    pub area: &'static str,
}

/// Response to a submitted commitment.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitCommitmentResponse {
    pub message: &'static str,
    pub commitment: CommitmentView,
    pub encouragement_heading: &'static str,
    pub encouragement: &'static [&'static str],
}

impl From<SubmitCommitmentResult> for SubmitCommitmentResponse {
    fn from(result: SubmitCommitmentResult) -> Self {
        let commitment = &result.commitment;
        Self {
            message: "Thank you for your commitment!",
            commitment: CommitmentView {
                attribution: commitment.attribution(),
                commitment: commitment.text().to_string(),
                area: commitment.commitment_type().display_name(),
            },
            encouragement_heading: result.encouragement_heading,
            encouragement: result.encouragement,
        }
    }
}

/// Response listing example commitments.
#[derive(Debug, Clone, Serialize)]
pub struct SampleCommitmentsResponse {
    pub samples: Vec<CommitmentView>,
}

impl From<&[SampleCommitment]> for SampleCommitmentsResponse {
    fn from(samples: &[SampleCommitment]) -> Self {
        Self {
            samples: samples
                .iter()
                .map(|s| CommitmentView {
                    attribution: format!("{} from {} commits to:", s.name, s.department),
                    commitment: s.text.to_string(),
                    area: s.commitment_type.display_name(),
                })
                .collect(),
        }
    }
}
