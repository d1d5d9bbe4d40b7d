//! Commitment wall - concrete actions participants commit to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Area a commitment falls under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentType {
    #[default]
    PersonalPracticeChange,
    AdvocatingForPolicyChange,
    SupportingColleagues,
    ChallengingBias,
    CreatingResources,
    Other,
}

impl CommitmentType {
    /// Returns all commitment types in selector order.
    pub fn all() -> &'static [CommitmentType] {
        &[
            CommitmentType::PersonalPracticeChange,
            CommitmentType::AdvocatingForPolicyChange,
            CommitmentType::SupportingColleagues,
            CommitmentType::ChallengingBias,
            CommitmentType::CreatingResources,
            CommitmentType::Other,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CommitmentType::PersonalPracticeChange => "Personal Practice Change",
            CommitmentType::AdvocatingForPolicyChange => "Advocating for Policy Change",
            CommitmentType::SupportingColleagues => "Supporting Colleagues",
            CommitmentType::ChallengingBias => "Challenging Bias",
            CommitmentType::CreatingResources => "Creating Resources",
            CommitmentType::Other => "Other",
        }
    }
}

impl fmt::Display for CommitmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A participant's commitment. Not stored anywhere once displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commitment {
    name: Option<String>,
    department: Option<String>,
    commitment_type: CommitmentType,
    text: String,
}

impl Commitment {
    /// Creates a commitment.
    ///
    /// Blank names and departments are treated as not given; blank
    /// commitment text is rejected.
    pub fn new(
        name: Option<String>,
        department: Option<String>,
        commitment_type: CommitmentType,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("commitment"));
        }

        Ok(Self {
            name: non_blank(name),
            department: non_blank(department),
            commitment_type,
            text: text.trim().to_string(),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn commitment_type(&self) -> CommitmentType {
        self.commitment_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line introducing the commitment on the wall.
    pub fn attribution(&self) -> String {
        let who = self.name.as_deref().unwrap_or("A participant");
        match &self.department {
            Some(department) => format!("{} from {} commits to:", who, department),
            None => format!("{} commits to:", who),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Warning shown when the commitment text is left blank.
pub const COMMITMENT_REQUIRED_MESSAGE: &str = "Please enter your commitment before submitting.";

/// Heading above the encouragement.
pub const ENCOURAGEMENT_HEADING: &str = "Making Change Happen";

/// Encouragement shown after a commitment is added.
pub const ENCOURAGEMENT: &[&str] = &[
    "Remember that creating a gender-responsive workplace requires both individual and collective action.",
    "Small changes in daily practices can lead to significant shifts in workplace culture over time.",
    "Consider sharing your commitment with colleagues and checking in on progress in 1-2 months.",
];

/// Example commitment shown on the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleCommitment {
    pub name: &'static str,
    pub department: &'static str,
    pub commitment_type: CommitmentType,
    pub text: &'static str,
}

const SAMPLE_COMMITMENTS: &[SampleCommitment] = &[
    SampleCommitment {
        name: "Dr. Thomas Odhiambo",
        department: "Entomology",
        commitment_type: CommitmentType::ChallengingBias,
        text: "I commit to speaking up when I notice colleagues being interrupted in meetings, ensuring everyone has an equal chance to contribute.",
    },
    SampleCommitment {
        name: "Dr. Jane Mwangi",
        department: "Vector Biology",
        commitment_type: CommitmentType::SupportingColleagues,
        text: "I commit to mentoring at least two junior female researchers in my field and advocating for their inclusion in key research projects.",
    },
    SampleCommitment {
        name: "John Kamau",
        department: "Human Resources",
        commitment_type: CommitmentType::AdvocatingForPolicyChange,
        text: "I commit to conducting a gender pay analysis within our department and presenting recommendations to leadership.",
    },
];

/// The example commitments displayed beneath the form.
pub fn sample_commitments() -> &'static [SampleCommitment] {
    SAMPLE_COMMITMENTS
}
