//! Introduction content and workshop details.

use serde::Serialize;

/// Workshop title shown in navigation and the footer.
pub const WORKSHOP_TITLE: &str =
    "Gender, One Health, Safeguarding, and Human Rights Principles Training";

/// Details of the workshop session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkshopInfo {
    pub title: &'static str,
    pub presenter: &'static str,
    pub affiliation: &'static str,
    pub host: &'static str,
    pub location: &'static str,
    pub date: &'static str,
}

impl WorkshopInfo {
    /// The workshop this companion was built for.
    pub fn current() -> Self {
        Self {
            title: WORKSHOP_TITLE,
            presenter: "Prof. Salome Bukachi",
            affiliation: "University of Nairobi",
            host: "International Centre of Insect Physiology and Ecology (ICIPE)",
            location: "Nairobi, Kenya",
            date: "February 2025",
        }
    }

    /// Footer lines shown at the bottom of every page.
    pub fn footer(&self) -> [String; 2] {
        [
            format!("{} Workshop", self.title),
            format!("{}, {} • {}", self.host, self.location, self.date),
        ]
    }
}

/// One series in the representation chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepresentationSeries {
    pub name: &'static str,
    pub color: &'static str,
    /// Percentages per group, aligned with `RepresentationChart::groups`.
    pub values: [u8; 2],
}

/// Illustrative data on the gap between research staff and leadership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepresentationChart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub groups: [&'static str; 2],
    pub series: [RepresentationSeries; 2],
    pub caption: &'static str,
}

/// Static content of the introduction page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Introduction {
    pub heading: &'static str,
    pub characteristics: &'static [&'static str],
    pub source: &'static str,
    pub benefits: &'static [&'static str],
    pub representation: RepresentationChart,
}

const CHARACTERISTICS: &[&str] = &[
    "Notices the not-usually-visible needs and problems of women employees",
    "Creates solutions in response to these needs",
    "Takes steps and actions to implement the created solutions",
    "Monitors the results in the long term",
    "Actively endeavors to increase the satisfaction of employees and to remedy complaints",
];

const BENEFITS: &[&str] = &[
    "Diverse teams produce more innovative research",
    "Better problem-solving through varied perspectives",
    "More comprehensive research design",
    "Improved community engagement",
    "Enhanced research relevance for diverse populations",
];

impl Introduction {
    pub fn content() -> Self {
        Self {
            heading: "Gender-Responsive Workplaces",
            characteristics: CHARACTERISTICS,
            source: "A Guide for Gender-Responsive Companies and Institutions",
            benefits: BENEFITS,
            representation: RepresentationChart {
                title: "Gender Representation Gap in Research Organizations",
                y_label: "Percentage",
                groups: ["Male", "Female"],
                series: [
                    RepresentationSeries {
                        name: "Leadership Positions",
                        color: "#1565C0",
                        values: [85, 15],
                    },
                    RepresentationSeries {
                        name: "Researchers",
                        color: "#2E7D32",
                        values: [55, 45],
                    },
                ],
                caption: "Example data showing the gender gap between research staff and leadership positions",
            },
        }
    }
}
