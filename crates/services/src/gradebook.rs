use std::sync::Arc;

use course_core::model::{
    GradeCategory, GradebookItem, GradebookItemId, Score, Student, StudentId, round_one_decimal,
};
use storage::repository::{GradebookRepository, RosterRepository, StorageError};
use tracing::{info, warn};

use crate::error::GradebookError;

/// Weighted final grade over the published items a student has a grade for.
///
/// Returns `None` when no published item carries a grade; an empty gradebook
/// never counts as zero. The result is rounded to one decimal.
#[must_use]
pub fn final_grade(student: &Student, items: &[GradebookItem]) -> Option<f64> {
    let (earned, weight_sum) = items
        .iter()
        .filter(|item| item.is_published())
        .filter_map(|item| {
            let grade = student.grade(item.title())?;
            let weight = item.weight().value();
            Some((grade.value() * weight, weight))
        })
        .fold((0.0, 0.0), |(earned, total), (points, weight)| {
            (earned + points, total + weight)
        });

    if weight_sum > 0.0 {
        Some(round_one_decimal(earned / weight_sum))
    } else {
        None
    }
}

/// A category and the items under it, in sheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: GradeCategory,
    /// Sum of every item weight in the group, published or not.
    pub total_weight: f64,
    pub items: Vec<GradebookItem>,
}

/// Group items by category, ordering groups by first appearance.
#[must_use]
pub fn category_groups(items: &[GradebookItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category()) {
            Some(group) => {
                group.total_weight += item.weight().value();
                group.items.push(item.clone());
            }
            None => groups.push(CategoryGroup {
                category: item.category(),
                total_weight: item.weight().value(),
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

/// One student's standing in a category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStanding {
    pub category: GradeCategory,
    /// Weight of published items the student has a grade for.
    pub graded_weight: f64,
    /// Weighted points earned, on the same scale as `graded_weight`.
    pub earned: f64,
    /// `earned / graded_weight` as a percentage, `None` with nothing graded.
    pub percent: Option<f64>,
}

/// Per-category breakdown of the published, graded items.
#[must_use]
pub fn category_breakdown(student: &Student, items: &[GradebookItem]) -> Vec<CategoryStanding> {
    category_groups(items)
        .into_iter()
        .map(|group| {
            let (earned, graded_weight) = group
                .items
                .iter()
                .filter(|item| item.is_published())
                .filter_map(|item| {
                    let grade = student.grade(item.title())?;
                    let weight = item.weight().value();
                    Some((grade.fraction() * weight, weight))
                })
                .fold((0.0, 0.0), |(e, w), (points, weight)| (e + points, w + weight));
            let percent = (graded_weight > 0.0)
                .then(|| round_one_decimal(earned / graded_weight * 100.0));
            CategoryStanding {
                category: group.category,
                graded_weight,
                earned: round_one_decimal(earned),
                percent,
            }
        })
        .collect()
}

/// What the sheet shows in one student/item cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeCell {
    /// Item is unpublished.
    Hidden,
    /// Published but no grade recorded.
    Missing,
    Scored(Score),
}

impl GradeCell {
    #[must_use]
    pub fn for_item(student: &Student, item: &GradebookItem) -> Self {
        if !item.is_published() {
            return GradeCell::Hidden;
        }
        student
            .grade(item.title())
            .map_or(GradeCell::Missing, GradeCell::Scored)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradebookRow {
    pub student_id: StudentId,
    pub name: String,
    /// One cell per item, in `GradebookSheet::items` order.
    pub cells: Vec<GradeCell>,
    pub final_grade: Option<f64>,
}

/// Whole gradebook as a table.
#[derive(Debug, Clone, PartialEq)]
pub struct GradebookSheet {
    pub groups: Vec<CategoryGroup>,
    /// Items flattened in group order; matches the cell order of each row.
    pub items: Vec<GradebookItem>,
    pub rows: Vec<GradebookRow>,
}

/// Gradebook reads and the publish toggle.
#[derive(Clone)]
pub struct GradebookService {
    roster: Arc<dyn RosterRepository>,
    gradebook: Arc<dyn GradebookRepository>,
}

impl GradebookService {
    #[must_use]
    pub fn new(roster: Arc<dyn RosterRepository>, gradebook: Arc<dyn GradebookRepository>) -> Self {
        Self { roster, gradebook }
    }

    /// # Errors
    ///
    /// Returns `GradebookError::Storage` if items cannot be read.
    pub fn items(&self) -> Result<Vec<GradebookItem>, GradebookError> {
        Ok(self.gradebook.list_items()?)
    }

    /// Flip an item's published flag and persist it. Returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns `GradebookError::ItemNotFound` for an unknown id and
    /// `GradebookError::Storage` if the save fails.
    pub fn toggle_published(&self, item_id: GradebookItemId) -> Result<bool, GradebookError> {
        let mut item = self.gradebook.get_item(item_id).map_err(|err| match err {
            StorageError::NotFound => {
                warn!(item = %item_id, "toggle on unknown gradebook item");
                GradebookError::ItemNotFound(item_id)
            }
            other => GradebookError::Storage(other),
        })?;
        item.toggle_published();
        self.gradebook.save_item(&item)?;
        info!(
            item = %item_id,
            title = item.title(),
            published = item.is_published(),
            "gradebook item publication changed"
        );
        Ok(item.is_published())
    }

    /// # Errors
    ///
    /// Returns `GradebookError::StudentNotFound` if the student is not
    /// enrolled, `GradebookError::Storage` on read failures.
    pub fn final_grade_for(&self, student_id: StudentId) -> Result<Option<f64>, GradebookError> {
        let student = self.roster.get_student(student_id).map_err(|err| match err {
            StorageError::NotFound => GradebookError::StudentNotFound(student_id),
            other => GradebookError::Storage(other),
        })?;
        let items = self.gradebook.list_items()?;
        Ok(final_grade(&student, &items))
    }

    /// # Errors
    ///
    /// Returns `GradebookError::Storage` if the roster or items cannot be read.
    pub fn sheet(&self) -> Result<GradebookSheet, GradebookError> {
        let items = self.gradebook.list_items()?;
        let students = self.roster.list_students()?;
        let groups = category_groups(&items);
        let ordered: Vec<GradebookItem> = groups
            .iter()
            .flat_map(|group| group.items.iter().cloned())
            .collect();

        let rows = students
            .iter()
            .map(|student| GradebookRow {
                student_id: student.id(),
                name: student.name().to_owned(),
                cells: ordered
                    .iter()
                    .map(|item| GradeCell::for_item(student, item))
                    .collect(),
                final_grade: final_grade(student, &items),
            })
            .collect();

        Ok(GradebookSheet {
            groups,
            items: ordered,
            rows,
        })
    }
}
