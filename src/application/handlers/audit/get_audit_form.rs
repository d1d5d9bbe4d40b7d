//! GetAuditFormHandler - Query handler for the audit form definition.

use serde::Serialize;

use crate::domain::foundation::{AuditDimension, AuditScore};

/// Query for the audit form.
#[derive(Debug, Clone, Default)]
pub struct GetAuditFormQuery;

/// One rating input on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFormField {
    pub dimension: AuditDimension,
    pub title: &'static str,
    pub help: &'static str,
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

/// The full audit form: one field per dimension plus the scale legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditForm {
    pub fields: Vec<AuditFormField>,
    pub scale_legend: String,
}

/// Handler returning the fixed audit form.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetAuditFormHandler;

impl GetAuditFormHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: GetAuditFormQuery) -> AuditForm {
        let fields = AuditDimension::all()
            .iter()
            .map(|d| AuditFormField {
                dimension: *d,
                title: d.title(),
                help: d.help_text(),
                min: AuditScore::MIN.value(),
                max: AuditScore::MAX.value(),
                default: AuditScore::default().value(),
            })
            .collect();

        let scale_legend = format!(
            "{} = {}, {} = {}",
            AuditScore::MIN,
            AuditScore::MIN.legend().unwrap_or_default(),
            AuditScore::MAX,
            AuditScore::MAX.legend().unwrap_or_default(),
        );

        AuditForm {
            fields,
            scale_legend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_has_field_per_dimension_defaulting_to_midpoint() {
        let form = GetAuditFormHandler::new().handle(GetAuditFormQuery);

        assert_eq!(form.fields.len(), 5);
        assert!(form.fields.iter().all(|f| f.min == 1 && f.max == 5 && f.default == 3));
        assert_eq!(form.fields[3].title, "Work-Life Balance Support");
    }

    #[test]
    fn form_legend_describes_scale_ends() {
        let form = GetAuditFormHandler::new().handle(GetAuditFormQuery);
        assert_eq!(
            form.scale_legend,
            "1 = Needs significant improvement, 5 = Exemplary"
        );
    }
}
