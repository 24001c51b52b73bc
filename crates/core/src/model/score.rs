use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Upper bound of every percentage scale in the course (grades, weights).
pub const MAX_PERCENT: f64 = 100.0;

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("grade must be a finite number")]
    NotFinite,

    #[error("grade {0} is outside 0..=100")]
    OutOfRange(f64),

    #[error("grade input {0:?} is not a number")]
    Malformed(String),
}

/// A grade on the 0..=100 scale, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// # Errors
    ///
    /// Returns `ScoreError::NotFinite` for NaN/infinite input and
    /// `ScoreError::OutOfRange` outside `0..=100`.
    pub fn new(value: f64) -> Result<Self, ScoreError> {
        if !value.is_finite() {
            return Err(ScoreError::NotFinite);
        }
        if !(0.0..=MAX_PERCENT).contains(&value) {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parse a grade typed into a form field.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::Malformed` when the text is not a number, otherwise
    /// the same errors as [`Score::new`].
    pub fn parse(raw: &str) -> Result<Self, ScoreError> {
        let trimmed = raw.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ScoreError::Malformed(trimmed.to_owned()))?;
        Self::new(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Fraction of the full scale, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / MAX_PERCENT
    }
}

impl TryFrom<f64> for Score {
    type Error = ScoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── WEIGHT ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum WeightError {
    #[error("weight must be a finite number")]
    NotFinite,

    #[error("weight {0} is outside 0..=100")]
    OutOfRange(f64),
}

/// Percentage weight of a gradebook item.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// # Errors
    ///
    /// Returns `WeightError` for non-finite values or values outside `0..=100`.
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }
        if !(0.0..=MAX_PERCENT).contains(&value) {
            return Err(WeightError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = WeightError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round to one decimal place, halves away from zero.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_inclusive_bounds() {
        assert_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::new(100.0).unwrap().value(), 100.0);
    }

    #[test]
    fn score_rejects_out_of_range_and_nan() {
        assert_eq!(Score::new(-0.5), Err(ScoreError::OutOfRange(-0.5)));
        assert_eq!(Score::new(100.01), Err(ScoreError::OutOfRange(100.01)));
        assert_eq!(Score::new(f64::NAN), Err(ScoreError::NotFinite));
        assert_eq!(Score::new(f64::INFINITY), Err(ScoreError::NotFinite));
    }

    #[test]
    fn score_parse_trims_and_reports_garbage() {
        assert_eq!(Score::parse(" 87.5 ").unwrap().value(), 87.5);
        assert_eq!(
            Score::parse("ninety"),
            Err(ScoreError::Malformed("ninety".into()))
        );
        assert_eq!(Score::parse(""), Err(ScoreError::Malformed(String::new())));
    }

    #[test]
    fn score_display_drops_trailing_zero() {
        assert_eq!(Score::new(90.0).unwrap().to_string(), "90");
        assert_eq!(Score::new(72.5).unwrap().to_string(), "72.5");
    }

    #[test]
    fn weight_rejects_out_of_range() {
        assert!(Weight::new(15.0).is_ok());
        assert_eq!(Weight::new(120.0), Err(WeightError::OutOfRange(120.0)));
    }

    #[test]
    fn rounding_goes_half_away_from_zero() {
        assert_eq!(round_one_decimal(84.25), 84.3);
        assert_eq!(round_one_decimal(84.24), 84.2);
        assert_eq!(round_one_decimal(-0.25), -0.3);
        assert_eq!(round_one_decimal(90.0), 90.0);
    }
}
