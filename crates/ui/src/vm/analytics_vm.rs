use chrono::NaiveDate;
use course_core::model::{CourseBoard, Student};
use services::overview::{INACTIVE_AFTER_DAYS, days_inactive};

use crate::vm::StudentChipVm;
use crate::vm::time_fmt::format_date;

/// Unlocked lessons completed by fewer students than this are flagged.
pub const PROBLEM_COMPLETION_PERCENT: u8 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonStatVm {
    pub id: u64,
    pub title: String,
    pub module: String,
    pub completed: usize,
    pub percent: u8,
    pub is_locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsVm {
    pub lessons: Vec<LessonStatVm>,
    pub problem_lessons: Vec<LessonStatVm>,
    pub inactive: Vec<StudentChipVm>,
}

fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (completed * 100 + total / 2) / total;
    u8::try_from(percent.min(100)).unwrap_or(100)
}

#[must_use]
pub fn map_analytics(board: &CourseBoard, students: &[Student], today: NaiveDate) -> AnalyticsVm {
    let lessons: Vec<LessonStatVm> = board
        .modules
        .iter()
        .flat_map(|module| {
            module.lessons.iter().map(|lesson| {
                let completed = students.iter().filter(|s| s.has_completed(lesson.id)).count();
                LessonStatVm {
                    id: lesson.id,
                    title: lesson.title.clone(),
                    module: module.title.clone(),
                    completed,
                    percent: completion_percent(completed, students.len()),
                    is_locked: lesson.is_locked,
                }
            })
        })
        .collect();
    let problem_lessons = lessons
        .iter()
        .filter(|l| !l.is_locked && l.percent < PROBLEM_COMPLETION_PERCENT)
        .cloned()
        .collect();
    let inactive = students
        .iter()
        .filter(|s| days_inactive(s, today) > INACTIVE_AFTER_DAYS)
        .map(|s| StudentChipVm {
            id: s.id(),
            name: s.name().to_owned(),
            detail: format!("Last connection: {}", format_date(s.last_connection())),
        })
        .collect();

    AnalyticsVm {
        lessons,
        problem_lessons,
        inactive,
    }
}
