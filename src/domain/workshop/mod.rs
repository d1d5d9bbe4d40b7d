//! Workshop Module - Static workshop content and participant inputs.
//!
//! Everything here is read-only content or short-lived participant input
//! that is validated and echoed back. Nothing is persisted.

mod case_study;
mod commitment;
mod group_response;
mod introduction;
mod reflection;

pub use case_study::{CaseStudy, CaseStudyLibrary};
pub use commitment::{
    sample_commitments, Commitment, CommitmentType, SampleCommitment,
    COMMITMENT_REQUIRED_MESSAGE, ENCOURAGEMENT, ENCOURAGEMENT_HEADING,
};
pub use group_response::{GroupResponse, ShareAcknowledgement, INCOMPLETE_RESPONSE_MESSAGE};
pub use introduction::{
    Introduction, RepresentationChart, RepresentationSeries, WorkshopInfo, WORKSHOP_TITLE,
};
pub use reflection::{reflect, ReflectionInsight, ReflectionStatement, ReflectionSummary};
