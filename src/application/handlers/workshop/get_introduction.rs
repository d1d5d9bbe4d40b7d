//! GetIntroductionHandler - Query handler for the introduction page and workshop details.

use crate::domain::workshop::{Introduction, WorkshopInfo};

/// Query for the introduction content.
#[derive(Debug, Clone, Default)]
pub struct GetIntroductionQuery;

/// Handler returning the static introduction content.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetIntroductionHandler;

impl GetIntroductionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: GetIntroductionQuery) -> Introduction {
        Introduction::content()
    }

    /// Workshop details and footer.
    pub fn workshop_info(&self) -> WorkshopInfo {
        WorkshopInfo::current()
    }
}
