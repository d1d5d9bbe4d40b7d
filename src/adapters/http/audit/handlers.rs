//! HTTP handlers for audit endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::{
    AuditForm, EvaluateAuditCommand, EvaluateAuditHandler, GetAuditFormHandler, GetAuditFormQuery,
};

use crate::adapters::http::error::ApiError;
use super::dto::{EvaluateAuditRequest, EvaluateAuditResponse};

/// Application state for audit endpoints.
#[derive(Debug, Clone, Default)]
pub struct AuditAppState {
    /// Explain unreadable request bodies in error responses
    pub verbose_errors: bool,
}

impl AuditAppState {
    pub fn new(verbose_errors: bool) -> Self {
        Self { verbose_errors }
    }

    pub fn evaluate_audit_handler(&self) -> EvaluateAuditHandler {
        EvaluateAuditHandler::new()
    }

    pub fn get_audit_form_handler(&self) -> GetAuditFormHandler {
        GetAuditFormHandler::new()
    }
}

/// Get the audit form definition.
///
/// GET /api/audit/dimensions
pub async fn get_audit_form(State(state): State<AuditAppState>) -> Json<AuditForm> {
    Json(state.get_audit_form_handler().handle(GetAuditFormQuery))
}

/// Evaluate an audit submission.
///
/// POST /api/audit/evaluate
pub async fn evaluate_audit(
    State(state): State<AuditAppState>,
    payload: Result<Json<EvaluateAuditRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::from_rejection(e, state.verbose_errors))?;
    let cmd = EvaluateAuditCommand {
        submission: request.into(),
    };

    let output = state.evaluate_audit_handler().handle(cmd)?;

    Ok(Json(EvaluateAuditResponse::from(output)))
}
