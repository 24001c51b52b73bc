use course_core::model::{GradebookItemId, StudentId};
use services::{GradeCell, GradebookSheet};

use crate::vm::time_fmt::{format_date, format_percent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryHeaderVm {
    pub label: &'static str,
    pub weight_label: String,
    pub span: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemColumnVm {
    pub id: GradebookItemId,
    pub title: String,
    pub weight_label: String,
    pub due_label: String,
    pub published: bool,
    pub toggle_hint: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellVm {
    pub text: String,
    pub class: &'static str,
}

impl From<GradeCell> for CellVm {
    fn from(cell: GradeCell) -> Self {
        match cell {
            GradeCell::Hidden => Self {
                text: "Hidden".to_owned(),
                class: "cell cell-hidden",
            },
            GradeCell::Missing => Self {
                text: "-".to_owned(),
                class: "cell cell-missing",
            },
            GradeCell::Scored(score) => Self {
                text: score.to_string(),
                class: "cell",
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradebookRowVm {
    pub student_id: StudentId,
    pub name: String,
    pub cells: Vec<CellVm>,
    pub final_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradebookVm {
    pub headers: Vec<CategoryHeaderVm>,
    pub columns: Vec<ItemColumnVm>,
    pub rows: Vec<GradebookRowVm>,
}

#[must_use]
pub fn map_gradebook(sheet: &GradebookSheet) -> GradebookVm {
    GradebookVm {
        headers: sheet
            .groups
            .iter()
            .map(|g| CategoryHeaderVm {
                label: g.category.label(),
                weight_label: format!("{}%", g.total_weight),
                span: g.items.len(),
            })
            .collect(),
        columns: sheet
            .items
            .iter()
            .map(|item| ItemColumnVm {
                id: item.id(),
                title: item.title().to_owned(),
                weight_label: format!("{}%", item.weight()),
                due_label: format_date(item.due_date()),
                published: item.is_published(),
                toggle_hint: if item.is_published() {
                    "Hide grades"
                } else {
                    "Publish grades"
                },
            })
            .collect(),
        rows: sheet
            .rows
            .iter()
            .map(|row| GradebookRowVm {
                student_id: row.student_id,
                name: row.name.clone(),
                cells: row.cells.iter().copied().map(CellVm::from).collect(),
                final_label: format_percent(row.final_grade),
            })
            .collect(),
    }
}
