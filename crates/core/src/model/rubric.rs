use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::AssignmentId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RubricError {
    #[error("rubric needs at least one criterion")]
    NoCriteria,

    #[error("criterion description cannot be empty")]
    EmptyDescription,

    #[error("duplicate criterion id {0}")]
    DuplicateCriterion(String),

    #[error("rating of {points} points exceeds the {max} available for criterion {criterion}")]
    RatingExceedsMax {
        criterion: String,
        points: u32,
        max: u32,
    },
}

//
// ─── CRITERIA ──────────────────────────────────────────────────────────────────
//

/// A named performance level inside a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub description: String,
    pub points: u32,
}

impl Rating {
    #[must_use]
    pub fn new(description: impl Into<String>, points: u32) -> Self {
        Self {
            description: description.into(),
            points,
        }
    }
}

/// One row of a rubric; ratings keep the order they were authored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    id: String,
    description: String,
    max_points: u32,
    ratings: Vec<Rating>,
}

impl Criterion {
    /// # Errors
    ///
    /// Returns `RubricError::EmptyDescription` for a blank description and
    /// `RubricError::RatingExceedsMax` when a rating is worth more than the criterion.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        max_points: u32,
        ratings: Vec<Rating>,
    ) -> Result<Self, RubricError> {
        let id = id.into();
        let description = description.into();
        if description.trim().is_empty() {
            return Err(RubricError::EmptyDescription);
        }
        if let Some(rating) = ratings.iter().find(|r| r.points > max_points) {
            return Err(RubricError::RatingExceedsMax {
                criterion: id,
                points: rating.points,
                max: max_points,
            });
        }
        Ok(Self {
            id,
            description: description.trim().to_owned(),
            max_points,
            ratings,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    #[must_use]
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }
}

//
// ─── RUBRIC ────────────────────────────────────────────────────────────────────
//

/// Scoring guide attached to an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    assignment_id: AssignmentId,
    criteria: Vec<Criterion>,
}

impl Rubric {
    /// # Errors
    ///
    /// Returns `RubricError::NoCriteria` for an empty list and
    /// `RubricError::DuplicateCriterion` when two criteria share an id.
    pub fn new(assignment_id: AssignmentId, criteria: Vec<Criterion>) -> Result<Self, RubricError> {
        if criteria.is_empty() {
            return Err(RubricError::NoCriteria);
        }
        let mut seen = HashSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.id()) {
                return Err(RubricError::DuplicateCriterion(criterion.id().to_owned()));
            }
        }
        Ok(Self {
            assignment_id,
            criteria,
        })
    }

    #[must_use]
    pub fn assignment_id(&self) -> AssignmentId {
        self.assignment_id
    }

    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    #[must_use]
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id() == id)
    }

    /// Highest achievable score: the sum of every criterion's maximum.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.criteria.iter().map(Criterion::max_points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precision() -> Criterion {
        Criterion::new(
            "c1",
            "Precisión del Modelo",
            10,
            vec![
                Rating::new("Excelente", 10),
                Rating::new("Bueno", 7),
                Rating::new("Necesita Mejora", 4),
            ],
        )
        .unwrap()
    }

    fn tools() -> Criterion {
        Criterion::new(
            "c2",
            "Uso de Herramientas",
            5,
            vec![Rating::new("Experto", 5), Rating::new("Básico", 1)],
        )
        .unwrap()
    }

    #[test]
    fn total_points_sums_criterion_maxima() {
        let rubric = Rubric::new(AssignmentId::new(1), vec![precision(), tools()]).unwrap();
        assert_eq!(rubric.total_points(), 15);
        assert_eq!(rubric.criterion("c2").unwrap().ratings().len(), 2);
        assert!(rubric.criterion("c9").is_none());
    }

    #[test]
    fn rating_above_max_is_rejected() {
        let err = Criterion::new("c3", "Presentación", 3, vec![Rating::new("Top", 4)]).unwrap_err();
        assert_eq!(
            err,
            RubricError::RatingExceedsMax {
                criterion: "c3".into(),
                points: 4,
                max: 3,
            }
        );
    }

    #[test]
    fn duplicate_and_empty_rubrics_are_rejected() {
        assert_eq!(
            Rubric::new(AssignmentId::new(1), Vec::new()).unwrap_err(),
            RubricError::NoCriteria
        );
        assert_eq!(
            Rubric::new(AssignmentId::new(1), vec![precision(), precision()]).unwrap_err(),
            RubricError::DuplicateCriterion("c1".into())
        );
    }
}
