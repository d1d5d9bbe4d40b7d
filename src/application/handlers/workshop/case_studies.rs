//! Case study query handlers.

use crate::domain::foundation::DomainError;
use crate::domain::workshop::{CaseStudy, CaseStudyLibrary};

/// Query listing all case studies.
#[derive(Debug, Clone, Default)]
pub struct ListCaseStudiesQuery;

/// Handler listing case studies in presentation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListCaseStudiesHandler;

impl ListCaseStudiesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: ListCaseStudiesQuery) -> &'static [CaseStudy] {
        CaseStudyLibrary::all()
    }
}

/// Query for a single case study.
#[derive(Debug, Clone)]
pub struct GetCaseStudyQuery {
    pub case_id: u8,
}

/// Handler fetching a case study by id.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetCaseStudyHandler;

impl GetCaseStudyHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetCaseStudyQuery) -> Result<&'static CaseStudy, DomainError> {
        CaseStudyLibrary::get(query.case_id)
    }
}
