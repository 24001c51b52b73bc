use chrono::{Datelike, NaiveDate};
use course_core::model::{CourseBoard, GradebookItem};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DayCellVm {
    /// `None` for padding cells outside the month.
    pub day: Option<u32>,
    pub is_today: bool,
    pub events: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarVm {
    pub title: String,
    /// Sunday-first rows of seven cells.
    pub weeks: Vec<Vec<DayCellVm>>,
}

fn events_on(day: NaiveDate, items: &[GradebookItem], board: &CourseBoard) -> Vec<String> {
    let due = items
        .iter()
        .filter(|item| item.due_date() == day)
        .map(|item| format!("{} due", item.title()));
    let scheduled = board
        .announcements
        .iter()
        .filter(|a| a.scheduled_for.is_some_and(|at| at.date() == day))
        .map(|a| a.title.clone());
    due.chain(scheduled).collect()
}

/// Month grid around `today` with due dates and scheduled announcements.
#[must_use]
pub fn map_calendar(today: NaiveDate, items: &[GradebookItem], board: &CourseBoard) -> CalendarVm {
    let first = today.with_day(1).unwrap_or(today);
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![DayCellVm::default(); leading];
    cells.extend(
        first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(|d| DayCellVm {
                day: Some(d.day()),
                is_today: d == today,
                events: events_on(d, items, board),
            }),
    );
    let padded = cells.len().div_ceil(7) * 7;
    cells.resize(padded, DayCellVm::default());

    CalendarVm {
        title: first.format("%B %Y").to_string(),
        weeks: cells.chunks(7).map(<[DayCellVm]>::to_vec).collect(),
    }
}
