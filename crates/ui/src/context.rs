use std::sync::Arc;

use course_core::model::{
    Assignment, AssignmentId, AuditEntry, CourseBoard, Student, StudentId,
};
use services::{
    AppServices, AppServicesError, CourseOverviewService, GradebookService, GradingError,
    GradingSession,
};

use crate::routes::View;

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn initial_view(&self) -> View;
    fn initial_assignment(&self) -> Option<AssignmentId>;

    /// # Errors
    ///
    /// Returns `GradingError` if the assignment cannot be opened.
    fn grading_session(
        &self,
        assignment: Option<AssignmentId>,
    ) -> Result<GradingSession, GradingError>;

    fn gradebook(&self) -> Arc<GradebookService>;
    fn overview(&self) -> Arc<CourseOverviewService>;

    /// # Errors
    ///
    /// Returns `AppServicesError` if the roster cannot be read.
    fn students(&self) -> Result<Vec<Student>, AppServicesError>;

    /// # Errors
    ///
    /// Returns `AppServicesError` if the roster cannot be read.
    fn student(&self, id: StudentId) -> Result<Option<Student>, AppServicesError>;

    /// # Errors
    ///
    /// Returns `AppServicesError` if assignments cannot be read.
    fn assignments(&self) -> Result<Vec<Assignment>, AppServicesError>;

    /// # Errors
    ///
    /// Returns `AppServicesError` if the audit log cannot be read.
    fn recent_activity(&self, limit: usize) -> Result<Vec<AuditEntry>, AppServicesError>;

    /// # Errors
    ///
    /// Returns `AppServicesError` if the course board cannot be read.
    fn board(&self) -> Result<CourseBoard, AppServicesError>;
}

/// `AppServices` plus the launch choices made on the command line.
#[derive(Clone)]
pub struct ServicesApp {
    services: AppServices,
    initial_view: View,
    initial_assignment: Option<AssignmentId>,
}

impl ServicesApp {
    #[must_use]
    pub fn new(
        services: AppServices,
        initial_view: View,
        initial_assignment: Option<AssignmentId>,
    ) -> Self {
        Self {
            services,
            initial_view,
            initial_assignment,
        }
    }
}

impl UiApp for ServicesApp {
    fn initial_view(&self) -> View {
        self.initial_view
    }

    fn initial_assignment(&self) -> Option<AssignmentId> {
        self.initial_assignment
    }

    fn grading_session(
        &self,
        assignment: Option<AssignmentId>,
    ) -> Result<GradingSession, GradingError> {
        self.services.grading_session(assignment)
    }

    fn gradebook(&self) -> Arc<GradebookService> {
        self.services.gradebook()
    }

    fn overview(&self) -> Arc<CourseOverviewService> {
        self.services.overview()
    }

    fn students(&self) -> Result<Vec<Student>, AppServicesError> {
        self.services.students()
    }

    fn student(&self, id: StudentId) -> Result<Option<Student>, AppServicesError> {
        self.services.student(id)
    }

    fn assignments(&self) -> Result<Vec<Assignment>, AppServicesError> {
        self.services.assignments()
    }

    fn recent_activity(&self, limit: usize) -> Result<Vec<AuditEntry>, AppServicesError> {
        self.services.recent_activity(limit)
    }

    fn board(&self) -> Result<CourseBoard, AppServicesError> {
        self.services.board()
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    gradebook: Arc<GradebookService>,
    overview: Arc<CourseOverviewService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            gradebook: app.gradebook(),
            overview: app.overview(),
        }
    }

    #[must_use]
    pub fn initial_view(&self) -> View {
        self.app.initial_view()
    }

    /// A grading session on the configured assignment.
    ///
    /// # Errors
    ///
    /// Returns `GradingError` if the assignment cannot be opened.
    pub fn open_grading_session(&self) -> Result<GradingSession, GradingError> {
        self.app.grading_session(self.app.initial_assignment())
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
    /// Returns `AppServicesError` if the roster cannot be read.
    pub fn students(&self) -> Result<Vec<Student>, AppServicesError> {
        self.app.students()
    }

    /// # Errors
    ///
    /// Returns `AppServicesError` if the roster cannot be read.
    pub fn student(&self, id: StudentId) -> Result<Option<Student>, AppServicesError> {
        self.app.student(id)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError` if assignments cannot be read.
    pub fn assignments(&self) -> Result<Vec<Assignment>, AppServicesError> {
        self.app.assignments()
    }

    /// # Errors
    ///
    /// Returns `AppServicesError` if the audit log cannot be read.
    pub fn recent_activity(&self, limit: usize) -> Result<Vec<AuditEntry>, AppServicesError> {
        self.app.recent_activity(limit)
    }

    /// Every audit entry, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the audit log cannot be read.
    pub fn audit_log(&self) -> Result<Vec<AuditEntry>, AppServicesError> {
        self.app.recent_activity(usize::MAX)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError` if the course board cannot be read.
    pub fn board(&self) -> Result<CourseBoard, AppServicesError> {
        self.app.board()
    }
}

// Provided by the composition root (`crates/app`) or the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
