use thiserror::Error;

use crate::model::{
    AssignmentError, GradebookItemError, RubricError, ScoreError, StudentError, WeightError,
};

/// Any validation failure raised while building domain values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    Rubric(#[from] RubricError),
    #[error(transparent)]
    GradebookItem(#[from] GradebookItemError),
    #[error("invalid date: {0}")]
    Date(#[from] chrono::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Score;

    fn parse_then_score(raw: &str, score: f64) -> Result<(), Error> {
        chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
        Score::new(score)?;
        Ok(())
    }

    #[test]
    fn collects_model_and_date_failures() {
        assert!(parse_then_score("2024-07-23", 90.0).is_ok());
        assert!(matches!(parse_then_score("23/07/2024", 90.0), Err(Error::Date(_))));
        assert!(matches!(parse_then_score("2024-07-23", 101.0), Err(Error::Score(_))));
    }
}
