use std::sync::Arc;

use course_core::model::{Assignment, AssignmentId, AuditEntry, CourseBoard, Student, StudentId};
use storage::repository::{
    AssignmentRepository, AuditLog, BoardRepository, RosterRepository, Storage,
};
use tracing::debug;

use crate::Clock;
use crate::error::{AppServicesError, GradingError};
use crate::gradebook::GradebookService;
use crate::grading::{GradingDeps, GradingSession};
use crate::overview::CourseOverviewService;

/// Assembles the app-facing services over one storage bundle.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    grader: String,
    grading_deps: GradingDeps,
    roster: Arc<dyn RosterRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    audit: Arc<dyn AuditLog>,
    board: Arc<dyn BoardRepository>,
    gradebook: Arc<GradebookService>,
    overview: Arc<CourseOverviewService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, grader: impl Into<String>) -> Self {
        Self {
            clock,
            grader: grader.into(),
            grading_deps: GradingDeps::from_storage(storage),
            roster: Arc::clone(&storage.roster),
            assignments: Arc::clone(&storage.assignments),
            audit: Arc::clone(&storage.audit),
            gradebook: Arc::new(GradebookService::new(
                Arc::clone(&storage.roster),
                Arc::clone(&storage.gradebook),
            )),
            overview: Arc::new(CourseOverviewService::from_storage(clock, storage)),
            board: Arc::clone(&storage.board),
        }
    }

    /// Services over the seeded demo course.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Fixtures` if the seed data is invalid.
    pub fn seeded(clock: Clock, grader: impl Into<String>) -> Result<Self, AppServicesError> {
        let storage = Storage::seeded()?;
        Ok(Self::new(&storage, clock, grader))
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn grader(&self) -> &str {
        &self.grader
    }

    /// A fresh grading session opened on `assignment_id`, or on the first
    /// assignment when `None`. An empty course yields a session with nothing
    /// open.
    ///
    /// # Errors
    ///
    /// Returns `GradingError` if the assignment cannot be opened.
    pub fn grading_session(
        &self,
        assignment_id: Option<AssignmentId>,
    ) -> Result<GradingSession, GradingError> {
        let target = match assignment_id {
            Some(id) => Some(id),
            None => self
                .assignments
                .list_assignments()?
                .first()
                .map(Assignment::id),
        };
        let mut session =
            GradingSession::new(self.grading_deps.clone(), self.grader.clone(), self.clock);
        if let Some(id) = target {
            session.select_assignment(id)?;
        }
        debug!(assignment = ?target, "grading session created");
        Ok(session)
    }

    #[must_use]
    pub fn gradebook(&self) -> Arc<GradebookService> {
        Arc::clone(&self.gradebook)
    }

    #[must_use]
    pub fn overview(&self) -> Arc<CourseOverviewService> {
        Arc::clone(&self.overview)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the roster cannot be read.
    pub fn students(&self) -> Result<Vec<Student>, AppServicesError> {
        Ok(self.roster.list_students()?)
    }

    /// `None` when the student is not enrolled.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` on other read failures.
    pub fn student(&self, id: StudentId) -> Result<Option<Student>, AppServicesError> {
        match self.roster.get_student(id) {
            Ok(student) => Ok(Some(student)),
            Err(storage::StorageError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if assignments cannot be read.
    pub fn assignments(&self) -> Result<Vec<Assignment>, AppServicesError> {
        Ok(self.assignments.list_assignments()?)
    }

    /// Newest audit entries first.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the log cannot be read.
    pub fn recent_activity(&self, limit: usize) -> Result<Vec<AuditEntry>, AppServicesError> {
        Ok(self.audit.recent(limit)?)
    }

    /// The whole audit log, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the log cannot be read.
    pub fn audit_log(&self) -> Result<Vec<AuditEntry>, AppServicesError> {
        self.recent_activity(usize::MAX)
    }

    /// Course material around the grading tools.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the board cannot be read.
    pub fn board(&self) -> Result<CourseBoard, AppServicesError> {
        Ok(self.board.board()?)
    }
}
