use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{AssignmentId, StudentId};
use crate::model::score::Score;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssignmentError {
    #[error("assignment title cannot be empty")]
    EmptyTitle,
}

/// A gradable piece of work handed in through the SpeedGrader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    title: String,
}

impl Assignment {
    /// # Errors
    ///
    /// Returns `AssignmentError::EmptyTitle` if the title is blank.
    pub fn new(id: AssignmentId, title: impl Into<String>) -> Result<Self, AssignmentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AssignmentError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: title.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn id(&self) -> AssignmentId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Review state shown as a badge next to each submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Graded,
    Ungraded,
}

impl SubmissionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Graded => "Graded",
            SubmissionStatus::Ungraded => "Ungraded",
        }
    }
}

/// One student's hand-in for an assignment.
///
/// The status is derived from the grade, so "graded" and "has a grade" can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    student_id: StudentId,
    grade: Option<Score>,
    file_url: String,
    feedback: String,
}

impl Submission {
    #[must_use]
    pub fn ungraded(student_id: StudentId, file_url: impl Into<String>) -> Self {
        Self {
            student_id,
            grade: None,
            file_url: file_url.into(),
            feedback: String::new(),
        }
    }

    #[must_use]
    pub fn graded(
        student_id: StudentId,
        file_url: impl Into<String>,
        grade: Score,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            student_id,
            grade: Some(grade),
            file_url: file_url.into(),
            feedback: feedback.into(),
        }
    }

    #[must_use]
    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    #[must_use]
    pub fn grade(&self) -> Option<Score> {
        self.grade
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        if self.grade.is_some() {
            SubmissionStatus::Graded
        } else {
            SubmissionStatus::Ungraded
        }
    }

    #[must_use]
    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Apply a committed grade together with its feedback.
    pub fn record_grade(&mut self, grade: Score, feedback: impl Into<String>) {
        self.grade = Some(grade);
        self.feedback = feedback.into();
    }
}
