//! EvaluateAuditHandler - Command handler for scoring a quick gender audit.

use tracing::info;

use crate::domain::audit::{AuditResult, AuditScorer, AuditSubmission, ScoreChart};
use crate::domain::foundation::DomainError;

/// Command to evaluate one audit form submission.
#[derive(Debug, Clone)]
pub struct EvaluateAuditCommand {
    pub submission: AuditSubmission,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateAuditResult {
    pub result: AuditResult,
    pub chart: ScoreChart,
}

/// Handler for evaluating audits.
///
/// Stateless: each command is scored from scratch.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvaluateAuditHandler;

impl EvaluateAuditHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: EvaluateAuditCommand) -> Result<EvaluateAuditResult, DomainError> {
        let result = AuditScorer::evaluate(&cmd.submission)?;
        let chart = ScoreChart::from_result(&result);

        info!(
            average = %result.average_display(),
            focus = %result.focus_areas()[0].dimension,
            "Quick gender audit completed"
        );

        Ok(EvaluateAuditResult { result, chart })
    }
}
