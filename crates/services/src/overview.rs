use std::sync::Arc;

use course_core::model::{Student, SubmissionStatus, round_one_decimal};
use storage::repository::{
    AssignmentRepository, BoardRepository, RosterRepository, SubmissionRepository,
};
use tracing::debug;

use crate::Clock;
use crate::error::OverviewError;

/// Progress below this marks a student at risk.
pub const AT_RISK_PROGRESS: u8 = 40;
/// Any recorded grade below this marks a student at risk.
pub const AT_RISK_GRADE: f64 = 60.0;
/// Days since last connection after which a student counts as inactive.
pub const INACTIVE_AFTER_DAYS: i64 = 7;

#[must_use]
pub fn is_at_risk(student: &Student) -> bool {
    student.progress().value() < AT_RISK_PROGRESS
        || student
            .grades()
            .filter_map(|(_, grade)| grade)
            .any(|grade| grade.value() < AT_RISK_GRADE)
}

/// Whole days between the last connection and `today`.
#[must_use]
pub fn days_inactive(student: &Student, today: chrono::NaiveDate) -> i64 {
    (today - student.last_connection()).num_days()
}

/// Ungraded hand-ins for one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWork {
    pub assignment: String,
    pub count: usize,
}

/// Course snapshot for the dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseSummary {
    pub student_count: usize,
    pub average_progress: f64,
    /// Students whose last connection is today.
    pub active_today: usize,
    /// Ungraded submissions across every assignment.
    pub pending_submissions: usize,
    /// Assignments with ungraded work, in assignment order.
    pub pending_by_assignment: Vec<PendingWork>,
    pub module_count: usize,
    /// Announcements already visible to students.
    pub announcement_count: usize,
    pub at_risk: Vec<Student>,
    pub inactive: Vec<Student>,
}

/// Dashboard queries over the roster, the submissions and the course board.
#[derive(Clone)]
pub struct CourseOverviewService {
    clock: Clock,
    roster: Arc<dyn RosterRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    submissions: Arc<dyn SubmissionRepository>,
    board: Arc<dyn BoardRepository>,
}

impl CourseOverviewService {
    #[must_use]
    pub fn new(
        clock: Clock,
        roster: Arc<dyn RosterRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        submissions: Arc<dyn SubmissionRepository>,
        board: Arc<dyn BoardRepository>,
    ) -> Self {
        Self {
            clock,
            roster,
            assignments,
            submissions,
            board,
        }
    }

    #[must_use]
    pub fn from_storage(clock: Clock, storage: &storage::Storage) -> Self {
        Self::new(
            clock,
            Arc::clone(&storage.roster),
            Arc::clone(&storage.assignments),
            Arc::clone(&storage.submissions),
            Arc::clone(&storage.board),
        )
    }

    #[must_use]
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Students with low progress or a failing grade.
    ///
    /// # Errors
    ///
    /// Returns `OverviewError::Storage` if the roster cannot be read.
    pub fn at_risk(&self) -> Result<Vec<Student>, OverviewError> {
        Ok(self
            .roster
            .list_students()?
            .into_iter()
            .filter(is_at_risk)
            .collect())
    }

    /// Students who have not connected for more than a week.
    ///
    /// # Errors
    ///
    /// Returns `OverviewError::Storage` if the roster cannot be read.
    pub fn inactive(&self) -> Result<Vec<Student>, OverviewError> {
        let today = self.clock.today();
        Ok(self
            .roster
            .list_students()?
            .into_iter()
            .filter(|s| days_inactive(s, today) > INACTIVE_AFTER_DAYS)
            .collect())
    }

    /// Ungraded submissions per assignment, skipping assignments with none.
    ///
    /// # Errors
    ///
    /// Returns `OverviewError::Storage` if assignments or submissions cannot
    /// be read.
    pub fn pending_work(&self) -> Result<Vec<PendingWork>, OverviewError> {
        let mut pending = Vec::new();
        for assignment in self.assignments.list_assignments()? {
            let count = self
                .submissions
                .list_submissions(assignment.id())?
                .iter()
                .filter(|s| s.status() == SubmissionStatus::Ungraded)
                .count();
            if count > 0 {
                pending.push(PendingWork {
                    assignment: assignment.title().to_owned(),
                    count,
                });
            }
        }
        Ok(pending)
    }

    /// # Errors
    ///
    /// Returns `OverviewError::Storage` if any backing repository cannot be
    /// read.
    pub fn summary(&self) -> Result<CourseSummary, OverviewError> {
        let students = self.roster.list_students()?;
        let today = self.clock.today();
        let average_progress = if students.is_empty() {
            0.0
        } else {
            let total: f64 = students
                .iter()
                .map(|s| f64::from(s.progress().value()))
                .sum();
            #[allow(clippy::cast_precision_loss)]
            let count = students.len() as f64;
            round_one_decimal(total / count)
        };
        let at_risk = students.iter().filter(|s| is_at_risk(s)).cloned().collect();
        let inactive = students
            .iter()
            .filter(|s| days_inactive(s, today) > INACTIVE_AFTER_DAYS)
            .cloned()
            .collect();
        let active_today = students
            .iter()
            .filter(|s| s.last_connection() == today)
            .count();
        let pending_by_assignment = self.pending_work()?;
        let pending_submissions: usize = pending_by_assignment.iter().map(|p| p.count).sum();
        let board = self.board.board()?;
        debug!(
            students = students.len(),
            pending = pending_submissions,
            %today,
            "course summary built"
        );
        Ok(CourseSummary {
            student_count: students.len(),
            average_progress,
            active_today,
            pending_submissions,
            pending_by_assignment,
            module_count: board.modules.len(),
            announcement_count: board.visible_announcements(today),
            at_risk,
            inactive,
        })
    }
}
