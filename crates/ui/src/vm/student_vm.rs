use course_core::model::{GradebookItem, Student, StudentId};
use services::{category_breakdown, final_grade};

use crate::vm::time_fmt::{format_date, format_percent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRowVm {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub progress: u8,
    pub last_connection: String,
}

impl From<&Student> for StudentRowVm {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id(),
            name: student.name().to_owned(),
            email: student.email().to_owned(),
            progress: student.progress().value(),
            last_connection: format_date(student.last_connection()),
        }
    }
}

#[must_use]
pub fn map_student_rows(students: &[Student]) -> Vec<StudentRowVm> {
    students.iter().map(StudentRowVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeLineVm {
    pub title: String,
    pub grade: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryLineVm {
    pub label: &'static str,
    pub percent: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentDetailVm {
    pub row: StudentRowVm,
    pub completed_lessons: usize,
    pub grades: Vec<GradeLineVm>,
    pub categories: Vec<CategoryLineVm>,
    pub final_label: String,
}

#[must_use]
pub fn map_student_detail(student: &Student, items: &[GradebookItem]) -> StudentDetailVm {
    StudentDetailVm {
        row: StudentRowVm::from(student),
        completed_lessons: student.completed_lesson_count(),
        grades: student
            .grades()
            .map(|(title, grade)| GradeLineVm {
                title: title.to_owned(),
                grade: grade.map_or_else(|| "Not graded".to_owned(), |g| g.to_string()),
            })
            .collect(),
        categories: category_breakdown(student, items)
            .into_iter()
            .map(|standing| CategoryLineVm {
                label: standing.category.label(),
                percent: format_percent(standing.percent),
            })
            .collect(),
        final_label: format_percent(final_grade(student, items)),
    }
}
