use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::model::ids::StudentId;
use crate::model::score::Score;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentError {
    #[error("student name cannot be empty")]
    EmptyName,

    #[error("progress {0} is outside 0..=100")]
    ProgressOutOfRange(u8),
}

/// Course completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl TryFrom<u8> for Progress {
    type Error = StudentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl Progress {
    /// # Errors
    ///
    /// Returns `StudentError::ProgressOutOfRange` above 100.
    pub fn new(value: u8) -> Result<Self, StudentError> {
        if value > 100 {
            return Err(StudentError::ProgressOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// A learner on the course roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    email: String,
    progress: Progress,
    last_connection: NaiveDate,
    grades: BTreeMap<String, Option<Score>>,
    completed_lessons: BTreeSet<u64>,
}

impl Student {
    /// # Errors
    ///
    /// Returns `StudentError` if the name is blank or progress exceeds 100.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        email: impl Into<String>,
        progress: u8,
        last_connection: NaiveDate,
    ) -> Result<Self, StudentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StudentError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.trim().to_owned(),
            email: email.into(),
            progress: Progress::new(progress)?,
            last_connection,
            grades: BTreeMap::new(),
            completed_lessons: BTreeSet::new(),
        })
    }

    /// Record a gradebook entry; `None` marks the item as not yet graded.
    #[must_use]
    pub fn with_grade(mut self, title: impl Into<String>, grade: Option<Score>) -> Self {
        self.grades.insert(title.into(), grade);
        self
    }

    #[must_use]
    pub fn with_completed_lessons(mut self, lessons: impl IntoIterator<Item = u64>) -> Self {
        self.completed_lessons.extend(lessons);
        self
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn last_connection(&self) -> NaiveDate {
        self.last_connection
    }

    /// Recorded grade for a gradebook title, `None` when unset or unknown.
    #[must_use]
    pub fn grade(&self, title: &str) -> Option<Score> {
        self.grades.get(title).copied().flatten()
    }

    /// All gradebook entries, including unset ones.
    pub fn grades(&self) -> impl Iterator<Item = (&str, Option<Score>)> + '_ {
        self.grades.iter().map(|(title, grade)| (title.as_str(), *grade))
    }

    #[must_use]
    pub fn has_completed(&self, lesson_id: u64) -> bool {
        self.completed_lessons.contains(&lesson_id)
    }

    #[must_use]
    pub fn completed_lesson_count(&self) -> usize {
        self.completed_lessons.len()
    }
}
