#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod gradebook;
pub mod grading;
pub mod overview;

pub use course_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ErrorKind, GradebookError, GradingError, OverviewError};
pub use gradebook::{
    CategoryGroup, CategoryStanding, GradeCell, GradebookRow, GradebookService, GradebookSheet,
    category_breakdown, category_groups, final_grade,
};
pub use grading::{Draft, GradingDeps, GradingSession};
pub use overview::{CourseOverviewService, CourseSummary, PendingWork};
