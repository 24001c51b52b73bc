use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::GradebookItemId;
use crate::model::score::Weight;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradebookItemError {
    #[error("gradebook item title cannot be empty")]
    EmptyTitle,
}

/// Fixed set of gradebook column groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GradeCategory {
    Assignments,
    Projects,
    Exams,
}

impl GradeCategory {
    pub const ALL: [GradeCategory; 3] = [
        GradeCategory::Assignments,
        GradeCategory::Projects,
        GradeCategory::Exams,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GradeCategory::Assignments => "Assignments",
            GradeCategory::Projects => "Projects",
            GradeCategory::Exams => "Exams",
        }
    }
}

/// A weighted gradebook column.
///
/// Students only see (and are only graded on) items that are published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookItem {
    id: GradebookItemId,
    title: String,
    weight: Weight,
    category: GradeCategory,
    due_date: NaiveDate,
    is_published: bool,
}

impl GradebookItem {
    /// # Errors
    ///
    /// Returns `GradebookItemError::EmptyTitle` if the title is blank.
    pub fn new(
        id: GradebookItemId,
        title: impl Into<String>,
        weight: Weight,
        category: GradeCategory,
        due_date: NaiveDate,
        is_published: bool,
    ) -> Result<Self, GradebookItemError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GradebookItemError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: title.trim().to_owned(),
            weight,
            category,
            due_date,
            is_published,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> GradebookItemId {
        self.id
    }

    /// Matches the keys of `Student::grades`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn category(&self) -> GradeCategory {
        self.category
    }

    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.is_published
    }

    pub fn toggle_published(&mut self) {
        self.is_published = !self.is_published;
    }
}
