//! AuditScore value object (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A quick gender audit rating: 1 (needs significant improvement) to 5 (exemplary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AuditScore(u8);

impl AuditScore {
    /// Lowest allowed rating.
    pub const MIN: Self = Self(1);

    /// Highest allowed rating.
    pub const MAX: Self = Self(5);

    /// Midpoint of the scale, also the initial rating offered by the form.
    pub const MIDPOINT: Self = Self(3);

    /// Creates an AuditScore, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        Self::try_new_for("score", value)
    }

    /// Like [`AuditScore::try_new`] but names the offending field in the error.
    pub fn try_new_for(field: &str, value: i32) -> Result<Self, ValidationError> {
        let (min, max) = (i32::from(Self::MIN.0), i32::from(Self::MAX.0));
        if !(min..=max).contains(&value) {
            return Err(ValidationError::out_of_range(field, min, max, value));
        }
        // Range check above guarantees the value fits.
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the legend text for the ends of the scale.
    pub fn legend(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("Needs significant improvement"),
            5 => Some("Exemplary"),
            _ => None,
        }
    }
}

impl Default for AuditScore {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<i32> for AuditScore {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<AuditScore> for i32 {
    fn from(score: AuditScore) -> Self {
        i32::from(score.0)
    }
}

impl fmt::Display for AuditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
