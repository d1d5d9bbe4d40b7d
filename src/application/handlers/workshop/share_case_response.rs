//! ShareCaseResponseHandler - Command handler for sharing a group's case response.

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::workshop::{
    CaseStudyLibrary, GroupResponse, ShareAcknowledgement, INCOMPLETE_RESPONSE_MESSAGE,
};

/// Command to share a group response.
#[derive(Debug, Clone)]
pub struct ShareCaseResponseCommand {
    pub case_id: u8,
    pub insights: String,
    pub proposed_solutions: String,
}

/// Result of sharing a response.
#[derive(Debug, Clone)]
pub struct ShareCaseResponseResult {
    pub response: GroupResponse,
    pub acknowledgement: ShareAcknowledgement,
}

/// Handler validating and acknowledging group responses.
///
/// Responses are acknowledged, not stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShareCaseResponseHandler;

impl ShareCaseResponseHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        cmd: ShareCaseResponseCommand,
    ) -> Result<ShareCaseResponseResult, DomainError> {
        let case = CaseStudyLibrary::get(cmd.case_id)?;

        let response = GroupResponse::new(cmd.case_id, cmd.insights, cmd.proposed_solutions)
            .map_err(|e| {
                DomainError::new(ErrorCode::EmptyField, INCOMPLETE_RESPONSE_MESSAGE)
                    .with_detail("field", e.field().to_string())
            })?;

        info!(case = %case.label(), "Group response shared");

        Ok(ShareCaseResponseResult {
            response,
            acknowledgement: ShareAcknowledgement::standard(),
        })
    }
}
