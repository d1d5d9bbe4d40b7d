//! Reflection checklist on gender dynamics in the participant's workplace.

use serde::{Deserialize, Serialize};

/// Statements a participant can tick when reflecting on their workplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionStatement {
    WitnessedBias,
    PromotionDenied,
    PayGap,
    UnheardInMeetings,
    FlexibilityStigma,
    ParentalDoubleStandards,
}

impl ReflectionStatement {
    /// Returns all statements in display order.
    pub fn all() -> &'static [ReflectionStatement] {
        &[
            ReflectionStatement::WitnessedBias,
            ReflectionStatement::PromotionDenied,
            ReflectionStatement::PayGap,
            ReflectionStatement::UnheardInMeetings,
            ReflectionStatement::FlexibilityStigma,
            ReflectionStatement::ParentalDoubleStandards,
        ]
    }

    /// The checkbox text.
    pub fn text(&self) -> &'static str {
        match self {
            ReflectionStatement::WitnessedBias => "I have witnessed gender bias at work",
            ReflectionStatement::PromotionDenied => {
                "I know someone who was denied a promotion due to gender"
            }
            ReflectionStatement::PayGap => {
                "I believe the gender pay gap exists in my organization"
            }
            ReflectionStatement::UnheardInMeetings => {
                "I have felt unheard in a meeting because of my gender"
            }
            ReflectionStatement::FlexibilityStigma => {
                "I think flexible work policies are applied differently for men and women"
            }
            ReflectionStatement::ParentalDoubleStandards => {
                "I've observed different standards for mothers vs. fathers at work"
            }
        }
    }

    /// Short bolded topic name for the insight.
    pub fn topic(&self) -> &'static str {
        match self {
            ReflectionStatement::WitnessedBias => "Gender bias",
            ReflectionStatement::PromotionDenied => "Promotion barriers",
            ReflectionStatement::PayGap => "Pay disparities",
            ReflectionStatement::UnheardInMeetings => "Being unheard",
            ReflectionStatement::FlexibilityStigma => "Flexibility stigma",
            ReflectionStatement::ParentalDoubleStandards => "Parental double standards",
        }
    }

    /// Insight shown when the statement is selected, continuing from the topic.
    pub fn insight(&self) -> &'static str {
        match self {
            ReflectionStatement::WitnessedBias => {
                "can manifest in subtle ways, from who gets called on in meetings to how performance is evaluated."
            }
            ReflectionStatement::PromotionDenied => {
                "often stem from biased perceptions of leadership abilities and potential."
            }
            ReflectionStatement::PayGap => {
                "persist in many sectors, often beginning with initial salary negotiations and compounding over time."
            }
            ReflectionStatement::UnheardInMeetings => {
                "in meetings is a common experience, especially for women and those from marginalized groups."
            }
            ReflectionStatement::FlexibilityStigma => {
                "often affects women more than men, with assumptions about who 'should' use family leave policies."
            }
            ReflectionStatement::ParentalDoubleStandards => {
                "remain prevalent, with different expectations for mothers versus fathers in the workplace."
            }
        }
    }
}

/// Insight for one selected statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectionInsight {
    pub statement: ReflectionStatement,
    pub topic: &'static str,
    pub insight: &'static str,
}

/// Response to a participant's reflection selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectionSummary {
    pub selected_count: usize,
    pub message: String,
    pub insights: Vec<ReflectionInsight>,
}

/// Summarizes the selected statements.
///
/// Duplicate selections count once and insights follow display order.
/// Returns `None` when nothing is selected.
pub fn reflect(selected: &[ReflectionStatement]) -> Option<ReflectionSummary> {
    let insights: Vec<ReflectionInsight> = ReflectionStatement::all()
        .iter()
        .filter(|s| selected.contains(s))
        .map(|s| ReflectionInsight {
            statement: *s,
            topic: s.topic(),
            insight: s.insight(),
        })
        .collect();

    if insights.is_empty() {
        return None;
    }

    let selected_count = insights.len();
    Some(ReflectionSummary {
        selected_count,
        message: format!(
            "You selected {} statement(s). These observations are common in many organizations.",
            selected_count
        ),
        insights,
    })
}
