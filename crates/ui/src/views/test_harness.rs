use std::sync::Arc;

use course_core::model::{
    Assignment, AssignmentId, AuditEntry, CourseBoard, Student, StudentId,
};
use course_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    AppServices, AppServicesError, CourseOverviewService, GradebookService, GradingError,
    GradingSession,
};
use storage::repository::{Storage, StorageError};

use crate::context::{ServicesApp, UiApp, build_app_context};
use crate::routes::{Navigator, SubForm, View};
use crate::views::Shell;

/// Seeded services whose roster and activity reads fail.
struct OfflineApp {
    inner: ServicesApp,
}

fn offline() -> AppServicesError {
    AppServicesError::Storage(StorageError::Connection("offline".to_owned()))
}

impl UiApp for OfflineApp {
    fn initial_view(&self) -> View {
        self.inner.initial_view()
    }

    fn initial_assignment(&self) -> Option<AssignmentId> {
        self.inner.initial_assignment()
    }

    fn grading_session(
        &self,
        assignment: Option<AssignmentId>,
    ) -> Result<GradingSession, GradingError> {
        self.inner.grading_session(assignment)
    }

    fn gradebook(&self) -> Arc<GradebookService> {
        self.inner.gradebook()
    }

    fn overview(&self) -> Arc<CourseOverviewService> {
        self.inner.overview()
    }

    fn students(&self) -> Result<Vec<Student>, AppServicesError> {
        Err(offline())
    }

    fn student(&self, _id: StudentId) -> Result<Option<Student>, AppServicesError> {
        Err(offline())
    }

    fn assignments(&self) -> Result<Vec<Assignment>, AppServicesError> {
        self.inner.assignments()
    }

    fn recent_activity(&self, _limit: usize) -> Result<Vec<AuditEntry>, AppServicesError> {
        Err(offline())
    }

    fn board(&self) -> Result<CourseBoard, AppServicesError> {
        self.inner.board()
    }
}

/// Where the harness starts navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Start {
    View(View),
    Student(StudentId),
    ContentForm,
}

impl Start {
    fn navigator(self) -> Navigator {
        match self {
            Start::View(view) => Navigator::new(view),
            Start::Student(id) => {
                let mut nav = Navigator::new(View::Students);
                nav.select_student(id);
                nav
            }
            Start::ContentForm => {
                let mut nav = Navigator::new(View::Content);
                nav.open_sub_form(SubForm::ContentForm);
                nav
            }
        }
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<dyn UiApp>,
    start: Start,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| Signal::new(props.start.navigator()));
    rsx! { Shell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn seeded_app(start: Start) -> ServicesApp {
    let storage = Storage::seeded().expect("seed storage");
    let services = AppServices::new(&storage, fixed_clock(), "Profesor Titular");
    let view = match start {
        Start::View(view) => view,
        Start::Student(_) => View::Students,
        Start::ContentForm => View::Content,
    };
    ServicesApp::new(services, view, None)
}

fn harness(app: Arc<dyn UiApp>, start: Start) -> ViewHarness {
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(HarnessRoot, HarnessProps { app, start }),
    };
    harness.rebuild();
    harness
}

/// Seeded course with the clock fixed at 2024-07-23 12:00 UTC.
pub fn setup_view_harness(start: Start) -> ViewHarness {
    harness(Arc::new(seeded_app(start)), start)
}

/// Seeded course whose roster and activity reads fail.
pub fn setup_offline_harness(start: Start) -> ViewHarness {
    let app = OfflineApp {
        inner: seeded_app(start),
    };
    harness(Arc::new(app), start)
}
