//! Quick gender audit command and query handlers.

mod evaluate_audit;
mod get_audit_form;

pub use evaluate_audit::{EvaluateAuditCommand, EvaluateAuditHandler, EvaluateAuditResult};
pub use get_audit_form::{AuditForm, AuditFormField, GetAuditFormHandler, GetAuditFormQuery};
