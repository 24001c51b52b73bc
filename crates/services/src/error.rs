//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::{AssignmentId, GradebookItemId, ScoreError, StudentId};
use storage::repository::StorageError;
use storage::FixtureError;

/// Coarse classification the UI uses to pick a message style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An id referenced something that does not exist.
    NotFound,
    /// Input was out of range or malformed.
    Validation,
    /// The operation would throw away unsaved work.
    Conflict,
    Storage,
}

/// Errors emitted by `GradingSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GradingError {
    #[error("assignment {0} has no submissions list")]
    AssignmentNotFound(AssignmentId),
    #[error("student {0} has no submission for this assignment")]
    SubmissionNotFound(StudentId),
    #[error(transparent)]
    InvalidGrade(#[from] ScoreError),
    #[error("enter a grade before saving")]
    MissingGrade,
    #[error("no submission selected")]
    NoSelection,
    #[error("unsaved grade or feedback for student {0}")]
    UnsavedDraft(StudentId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl GradingError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradingError::AssignmentNotFound(_) | GradingError::SubmissionNotFound(_) => {
                ErrorKind::NotFound
            }
            GradingError::InvalidGrade(_)
            | GradingError::MissingGrade
            | GradingError::NoSelection => ErrorKind::Validation,
            GradingError::UnsavedDraft(_) => ErrorKind::Conflict,
            GradingError::Storage(StorageError::NotFound) => ErrorKind::NotFound,
            GradingError::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Errors emitted by `GradebookService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GradebookError {
    #[error("gradebook item {0} not found")]
    ItemNotFound(GradebookItemId),
    #[error("student {0} not found")]
    StudentNotFound(StudentId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl GradebookError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradebookError::ItemNotFound(_) | GradebookError::StudentNotFound(_) => {
                ErrorKind::NotFound
            }
            GradebookError::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Errors emitted by `CourseOverviewService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OverviewError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Fixtures(#[from] FixtureError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
