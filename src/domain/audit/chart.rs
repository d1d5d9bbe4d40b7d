//! Bar chart view model for audit results.

use serde::Serialize;

use crate::domain::foundation::AuditScore;

use super::scorer::AuditResult;

/// Upper bound of the y-axis, leaving headroom above the top score for labels.
pub const CHART_Y_LIMIT: f64 = 5.5;

/// One bar in the score chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: u8,
    pub color: &'static str,
}

/// Chart of the five dimension scores with a midpoint reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreChart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub y_limit: f64,
    pub reference_line: f64,
    pub bars: Vec<ChartBar>,
}

impl ScoreChart {
    /// Builds the chart for an evaluated audit, bars in canonical order.
    pub fn from_result(result: &AuditResult) -> Self {
        let bars = result
            .scores()
            .iter()
            .map(|s| ChartBar {
                label: s.dimension.label(),
                value: s.value(),
                color: s.dimension.chart_color(),
            })
            .collect();

        Self {
            title: "Gender-Responsiveness by Category",
            y_label: "Score (1-5)",
            y_limit: CHART_Y_LIMIT,
            reference_line: f64::from(AuditScore::MIDPOINT.value()),
            bars,
        }
    }
}
