//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. All
//! handlers are stateless and synchronous.

pub mod audit;
pub mod workshop;

pub use audit::{
    AuditForm, AuditFormField, EvaluateAuditCommand, EvaluateAuditHandler, EvaluateAuditResult,
    GetAuditFormHandler, GetAuditFormQuery,
};
pub use workshop::{
    GetCaseStudyHandler, GetCaseStudyQuery, GetIntroductionHandler, GetIntroductionQuery,
    ListCaseStudiesHandler, ListCaseStudiesQuery, ListSampleCommitmentsHandler,
    ListSampleCommitmentsQuery, ShareCaseResponseCommand, ShareCaseResponseHandler,
    ShareCaseResponseResult, SubmitCommitmentCommand, SubmitCommitmentHandler,
    SubmitCommitmentResult, SubmitReflectionCommand, SubmitReflectionHandler,
};
