//! SubmitCommitmentHandler - Command handler for the commitment wall.

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::workshop::{
    sample_commitments, Commitment, CommitmentType, SampleCommitment,
    COMMITMENT_REQUIRED_MESSAGE, ENCOURAGEMENT, ENCOURAGEMENT_HEADING,
};

/// Command to add a commitment to the wall.
#[derive(Debug, Clone, Default)]
pub struct SubmitCommitmentCommand {
    pub name: Option<String>,
    pub department: Option<String>,
    pub commitment_type: CommitmentType,
    pub commitment: String,
}

/// Result of a submitted commitment.
#[derive(Debug, Clone)]
pub struct SubmitCommitmentResult {
    pub commitment: Commitment,
    pub encouragement_heading: &'static str,
    pub encouragement: &'static [&'static str],
}

/// Handler validating and echoing back commitments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmitCommitmentHandler;

impl SubmitCommitmentHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: SubmitCommitmentCommand) -> Result<SubmitCommitmentResult, DomainError> {
        let commitment = Commitment::new(
            cmd.name,
            cmd.department,
            cmd.commitment_type,
            cmd.commitment,
        )
        .map_err(|e| {
            DomainError::new(ErrorCode::EmptyField, COMMITMENT_REQUIRED_MESSAGE)
                .with_detail("field", e.field().to_string())
        })?;

        info!(area = %commitment.commitment_type(), "Commitment added to wall");

        Ok(SubmitCommitmentResult {
            commitment,
            encouragement_heading: ENCOURAGEMENT_HEADING,
            encouragement: ENCOURAGEMENT,
        })
    }
}

/// Query for the example commitments.
#[derive(Debug, Clone, Default)]
pub struct ListSampleCommitmentsQuery;

/// Handler returning the example commitments.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListSampleCommitmentsHandler;

impl ListSampleCommitmentsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: ListSampleCommitmentsQuery) -> &'static [SampleCommitment] {
        sample_commitments()
    }
}
