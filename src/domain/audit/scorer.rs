//! Audit Scorer - Overall score and focus areas for the quick gender audit.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::foundation::{
    AuditDimension, AuditScore, DomainError, ErrorCode, ValidationError,
};

use super::catalog::{RecommendationCatalog, Recommendations};

/// Number of lowest-scoring dimensions surfaced as focus areas.
pub const FOCUS_AREA_COUNT: usize = 2;

/// Errors raised while evaluating an audit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    #[error("Invalid audit input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl From<AuditError> for DomainError {
    fn from(error: AuditError) -> Self {
        match error {
            AuditError::InvalidInput(inner) => {
                let field = inner.field().to_string();
                DomainError::new(ErrorCode::InvalidInput, inner.to_string())
                    .with_detail("field", field)
            }
        }
    }
}

/// A raw rating as collected by the shell, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRating {
    pub dimension: AuditDimension,
    pub value: i32,
}

impl SubmittedRating {
    pub fn new(dimension: AuditDimension, value: i32) -> Self {
        Self { dimension, value }
    }
}

/// One audit form submission.
///
/// Lives for a single evaluation; nothing carries over between submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSubmission {
    pub ratings: Vec<SubmittedRating>,
}

impl AuditSubmission {
    /// Creates a submission from ratings in any order.
    pub fn new(ratings: Vec<SubmittedRating>) -> Self {
        Self { ratings }
    }

    /// Creates a submission from five values given in canonical dimension order.
    pub fn from_ratings(values: [i32; AuditDimension::COUNT]) -> Self {
        let ratings = AuditDimension::all()
            .iter()
            .zip(values)
            .map(|(dimension, value)| SubmittedRating::new(*dimension, value))
            .collect();
        Self { ratings }
    }

    /// Adds a rating, builder style.
    pub fn with_rating(mut self, dimension: AuditDimension, value: i32) -> Self {
        self.ratings.push(SubmittedRating::new(dimension, value));
        self
    }
}

/// A validated rating for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: AuditDimension,
    pub score: AuditScore,
}

impl DimensionScore {
    pub fn new(dimension: AuditDimension, score: AuditScore) -> Self {
        Self { dimension, score }
    }

    /// Returns the numeric rating.
    pub fn value(&self) -> u8 {
        self.score.value()
    }
}

/// A lowest-scoring dimension together with its improvement actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusArea {
    pub dimension: AuditDimension,
    pub score: AuditScore,
    pub recommendations: &'static Recommendations,
}

impl FocusArea {
    fn for_score(score: DimensionScore) -> Self {
        Self {
            dimension: score.dimension,
            score: score.score,
            recommendations: RecommendationCatalog::for_dimension(score.dimension),
        }
    }

    /// Heading shown above the recommendations, e.g. `Recruitment (Score: 1)`.
    pub fn heading(&self) -> String {
        format!("{} (Score: {})", self.dimension.label(), self.score)
    }
}

/// Outcome of evaluating one audit submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    scores: [DimensionScore; AuditDimension::COUNT],
    total: u8,
    average: f64,
    focus_areas: [FocusArea; FOCUS_AREA_COUNT],
}

impl AuditResult {
    /// Scores in canonical dimension order.
    pub fn scores(&self) -> &[DimensionScore; AuditDimension::COUNT] {
        &self.scores
    }

    /// Sum of the five ratings.
    pub fn total(&self) -> u8 {
        self.total
    }

    /// Exact arithmetic mean of the five ratings.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// The average rounded to one decimal place for display.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Overall label, e.g. `3.4/5`.
    pub fn overall_label(&self) -> String {
        format!("{}/{}", self.average_display(), AuditScore::MAX)
    }

    /// The two lowest-scoring dimensions, lowest first.
    pub fn focus_areas(&self) -> &[FocusArea; FOCUS_AREA_COUNT] {
        &self.focus_areas
    }

    /// Returns the score recorded for a dimension.
    pub fn score_for(&self, dimension: AuditDimension) -> AuditScore {
        self.scores[dimension.order_index()].score
    }
}

/// Stateless evaluator for quick gender audit submissions.
pub struct AuditScorer;

impl AuditScorer {
    /// Evaluates a submission into an overall score and two focus areas.
    ///
    /// # Errors
    /// - `InvalidInput` if a rating is outside 1-5, or a dimension is
    ///   missing or rated more than once.
    pub fn evaluate(submission: &AuditSubmission) -> Result<AuditResult, AuditError> {
        let scores = Self::canonicalize(submission).map_err(|e| {
            warn!(error = %e, "Rejected audit submission");
            AuditError::InvalidInput(e)
        })?;

        let total: u8 = scores.iter().map(DimensionScore::value).sum();
        let average = f64::from(total) / AuditDimension::COUNT as f64;

        let ranked = Self::ranked_by_need(&scores);
        let focus_areas = [FocusArea::for_score(ranked[0]), FocusArea::for_score(ranked[1])];

        debug!(
            average,
            first_focus = %focus_areas[0].dimension,
            second_focus = %focus_areas[1].dimension,
            "Audit evaluated"
        );

        Ok(AuditResult {
            scores,
            total,
            average,
            focus_areas,
        })
    }

    /// Returns scores sorted lowest first.
    ///
    /// The sort is stable over canonical order, so equal scores keep
    /// declaration order (Leadership before Recruitment, and so on).
    pub fn ranked_by_need(
        scores: &[DimensionScore; AuditDimension::COUNT],
    ) -> [DimensionScore; AuditDimension::COUNT] {
        let mut ranked = *scores;
        ranked.sort_by_key(|s| s.score);
        ranked
    }

    /// Validates ratings and places them in canonical order.
    fn canonicalize(
        submission: &AuditSubmission,
    ) -> Result<[DimensionScore; AuditDimension::COUNT], ValidationError> {
        let mut slots: [Option<AuditScore>; AuditDimension::COUNT] = [None; AuditDimension::COUNT];

        for rating in &submission.ratings {
            let slot = &mut slots[rating.dimension.order_index()];
            if slot.is_some() {
                return Err(ValidationError::duplicate_entry(
                    "scores",
                    rating.dimension.key(),
                ));
            }
            *slot = Some(AuditScore::try_new_for(rating.dimension.key(), rating.value)?);
        }

        let mut scores = [DimensionScore::new(AuditDimension::Leadership, AuditScore::default());
            AuditDimension::COUNT];
        for (slot, dimension) in slots.iter().zip(AuditDimension::all()) {
            let score =
                slot.ok_or_else(|| ValidationError::missing_entry("scores", dimension.key()))?;
            scores[dimension.order_index()] = DimensionScore::new(*dimension, score);
        }

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn focus_dimensions(result: &AuditResult) -> [AuditDimension; 2] {
        [result.focus_areas()[0].dimension, result.focus_areas()[1].dimension]
    }

    #[test]
    fn all_equal_scores_pick_first_two_in_canonical_order() {
        let result = AuditScorer::evaluate(&AuditSubmission::from_ratings([3, 3, 3, 3, 3])).unwrap();

        assert_eq!(result.average(), 3.0);
        assert_eq!(
            focus_dimensions(&result),
            [AuditDimension::Leadership, AuditDimension::Recruitment]
        );
    }

    #[test]
    fn lowest_two_are_selected_lowest_first() {
        let result = AuditScorer::evaluate(&AuditSubmission::from_ratings([5, 1, 2, 4, 3])).unwrap();

        assert_eq!(result.average(), 3.0);
        assert_eq!(result.total(), 15);
        assert_eq!(
            focus_dimensions(&result),
            [AuditDimension::Recruitment, AuditDimension::Environment]
        );
        assert_eq!(result.focus_areas()[0].score.value(), 1);
        assert_eq!(result.focus_areas()[1].score.value(), 2);
    }

    #[test]
    fn tie_at_lowest_value_uses_declaration_order() {
        let result = AuditScorer::evaluate(&AuditSubmission::from_ratings([1, 1, 5, 5, 5])).unwrap();

        assert!((result.average() - 3.4).abs() < 1e-9);
        assert_eq!(result.average_display(), "3.4");
        assert_eq!(result.overall_label(), "3.4/5");
        assert_eq!(
            focus_dimensions(&result),
            [AuditDimension::Leadership, AuditDimension::Recruitment]
        );
    }

    #[test]
    fn tie_break_ignores_submission_order() {
        let submission = AuditSubmission::default()
            .with_rating(AuditDimension::Resources, 2)
            .with_rating(AuditDimension::WorkLife, 2)
            .with_rating(AuditDimension::Environment, 2)
            .with_rating(AuditDimension::Recruitment, 4)
            .with_rating(AuditDimension::Leadership, 4);

        let result = AuditScorer::evaluate(&submission).unwrap();

        assert_eq!(
            focus_dimensions(&result),
            [AuditDimension::Environment, AuditDimension::WorkLife]
        );
        assert_eq!(result.scores()[0].dimension, AuditDimension::Leadership);
        assert_eq!(result.score_for(AuditDimension::Resources).value(), 2);
    }

    #[test]
    fn focus_areas_carry_catalog_recommendations() {
        let result = AuditScorer::evaluate(&AuditSubmission::from_ratings([5, 1, 2, 4, 3])).unwrap();
        let first = &result.focus_areas()[0];

        assert_eq!(first.heading(), "Recruitment (Score: 1)");
        assert_eq!(
            first.recommendations[0],
            "Implement blind resume screening where possible"
        );
        assert_eq!(first.recommendations.len(), 3);
    }

    #[test]
    fn rejects_score_of_zero() {
        let err = AuditScorer::evaluate(&AuditSubmission::from_ratings([0, 3, 3, 3, 3])).unwrap_err();
        assert_eq!(
            err,
            AuditError::InvalidInput(ValidationError::out_of_range("leadership", 1, 5, 0))
        );
    }

    #[test]
    fn rejects_score_of_six() {
        let err = AuditScorer::evaluate(&AuditSubmission::from_ratings([3, 3, 3, 3, 6])).unwrap_err();
        assert_eq!(
            err,
            AuditError::InvalidInput(ValidationError::out_of_range("resources", 1, 5, 6))
        );
    }

    #[test]
    fn rejects_missing_dimension() {
        let submission = AuditSubmission::default()
            .with_rating(AuditDimension::Leadership, 3)
            .with_rating(AuditDimension::Recruitment, 3)
            .with_rating(AuditDimension::Environment, 3)
            .with_rating(AuditDimension::WorkLife, 3);

        let err = AuditScorer::evaluate(&submission).unwrap_err();
        assert_eq!(
            err,
            AuditError::InvalidInput(ValidationError::missing_entry("scores", "resources"))
        );
    }

    #[test]
    fn rejects_duplicate_dimension() {
        let submission = AuditSubmission::from_ratings([3, 3, 3, 3, 3])
            .with_rating(AuditDimension::Environment, 4);

        let err = AuditScorer::evaluate(&submission).unwrap_err();
        assert_eq!(
            err,
            AuditError::InvalidInput(ValidationError::duplicate_entry("scores", "environment"))
        );
    }

    #[test]
    fn rejects_empty_submission() {
        assert!(AuditScorer::evaluate(&AuditSubmission::default()).is_err());
    }

    #[test]
    fn audit_error_converts_to_invalid_input_domain_error() {
        let err: DomainError =
            AuditError::InvalidInput(ValidationError::out_of_range("work_life", 1, 5, 9)).into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.details.get("field"), Some(&"work_life".to_string()));
    }

    #[test]
    fn result_serializes_focus_areas() {
        let result = AuditScorer::evaluate(&AuditSubmission::from_ratings([5, 1, 2, 4, 3])).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["average"], 3.0);
        assert_eq!(json["focus_areas"][0]["dimension"], "recruitment");
        assert_eq!(json["scores"][3]["dimension"], "work_life");
    }

    proptest! {
        #[test]
        fn average_is_exact_mean_within_scale(values in prop::array::uniform5(1i32..=5)) {
            let result = AuditScorer::evaluate(&AuditSubmission::from_ratings(values)).unwrap();
            let expected = f64::from(values.iter().sum::<i32>()) / 5.0;

            prop_assert_eq!(result.average(), expected);
            prop_assert!((1.0..=5.0).contains(&result.average()));
        }

        #[test]
        fn focus_areas_never_exceed_unselected_scores(values in prop::array::uniform5(1i32..=5)) {
            let result = AuditScorer::evaluate(&AuditSubmission::from_ratings(values)).unwrap();
            let focus = result.focus_areas();

            prop_assert_eq!(focus.len(), FOCUS_AREA_COUNT);
            prop_assert_ne!(focus[0].dimension, focus[1].dimension);
            prop_assert!(focus[0].score <= focus[1].score);
            for score in result.scores() {
                if focus.iter().all(|f| f.dimension != score.dimension) {
                    prop_assert!(focus.iter().all(|f| f.score <= score.score));
                }
            }
        }

        #[test]
        fn result_is_independent_of_submission_order(values in prop::array::uniform5(1i32..=5)) {
            let forward = AuditSubmission::from_ratings(values);
            let reversed = AuditSubmission::new(forward.ratings.iter().rev().copied().collect());

            prop_assert_eq!(
                AuditScorer::evaluate(&forward).unwrap(),
                AuditScorer::evaluate(&reversed).unwrap()
            );
        }

        #[test]
        fn out_of_range_values_are_rejected(
            bad in prop_oneof![i32::MIN..1, 6..i32::MAX],
            position in 0usize..5,
        ) {
            let mut values = [3; 5];
            values[position] = bad;
            prop_assert!(AuditScorer::evaluate(&AuditSubmission::from_ratings(values)).is_err());
        }
    }
}
