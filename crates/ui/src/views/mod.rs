mod analytics;
mod board;
mod calendar;
mod content;
mod dashboard;
mod gradebook;
mod layout;
mod settings;
mod speed_grader;
mod state;
mod students;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use analytics::AnalyticsView;
pub use board::{
    AnnouncementsView, ForumView, GalleryView, GroupsView, InboxView, QuestionBankView,
    RecycleBinView,
};
pub use calendar::CalendarView;
pub use content::{ContentFormView, ContentView};
pub use dashboard::DashboardView;
pub use gradebook::GradebookView;
pub use layout::Shell;
pub use settings::SettingsView;
pub use speed_grader::SpeedGraderView;
pub use state::{ViewError, ViewState, view_state_from_result};
pub use students::{StudentDetailView, StudentListView};
