//! Workshop content command and query handlers.

mod case_studies;
mod get_introduction;
mod share_case_response;
mod submit_commitment;
mod submit_reflection;

pub use case_studies::{
    GetCaseStudyHandler, GetCaseStudyQuery, ListCaseStudiesHandler, ListCaseStudiesQuery,
};
pub use get_introduction::{GetIntroductionHandler, GetIntroductionQuery};
pub use share_case_response::{
    ShareCaseResponseCommand, ShareCaseResponseHandler, ShareCaseResponseResult,
};
pub use submit_commitment::{
    ListSampleCommitmentsHandler, ListSampleCommitmentsQuery, SubmitCommitmentCommand,
    SubmitCommitmentHandler, SubmitCommitmentResult,
};
pub use submit_reflection::{SubmitReflectionCommand, SubmitReflectionHandler};
