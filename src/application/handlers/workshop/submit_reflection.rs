//! SubmitReflectionHandler - Command handler for the reflection checklist.

use tracing::debug;

use crate::domain::workshop::{reflect, ReflectionStatement, ReflectionSummary};

/// Command carrying the statements a participant selected.
#[derive(Debug, Clone, Default)]
pub struct SubmitReflectionCommand {
    pub selected: Vec<ReflectionStatement>,
}

/// Handler summarizing reflection selections.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmitReflectionHandler;

impl SubmitReflectionHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` when nothing was selected.
    pub fn handle(&self, cmd: SubmitReflectionCommand) -> Option<ReflectionSummary> {
        let summary = reflect(&cmd.selected);
        debug!(
            selected = summary.as_ref().map_or(0, |s| s.selected_count),
            "Reflection submitted"
        );
        summary
    }
}
