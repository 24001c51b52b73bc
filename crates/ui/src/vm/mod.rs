mod analytics_vm;
mod board_vm;
mod calendar_vm;
mod dashboard_vm;
mod gradebook_vm;
mod settings_vm;
mod speed_grader_vm;
mod student_vm;
mod time_fmt;

pub use analytics_vm::{AnalyticsVm, LessonStatVm, PROBLEM_COMPLETION_PERCENT, map_analytics};
pub use board_vm::{
    AnnouncementVm, ForumPostVm, GalleryVm, GroupMemberVm, GroupVm, InboxVm, MessageVm,
    QuestionVm, RecycledVm, map_announcements, map_forum, map_gallery, map_groups, map_inbox,
    map_questions, map_recycle_bin,
};
pub use calendar_vm::{CalendarVm, DayCellVm, WEEKDAYS, map_calendar};
pub use dashboard_vm::{ActivityVm, DashboardVm, StudentChipVm, map_dashboard};
pub use gradebook_vm::{
    CategoryHeaderVm, CellVm, GradebookRowVm, GradebookVm, ItemColumnVm, map_gradebook,
};
pub use settings_vm::{DueDateVm, SettingsTab, SettingsVm, StaffRowVm, map_settings};
pub use speed_grader_vm::{
    AssignmentOptionVm, CriterionVm, RubricVm, SelectedSubmissionVm, SpeedGraderVm,
    SubmissionRowVm, map_rubric, map_speed_grader, parse_grade_input,
};
pub use student_vm::{
    CategoryLineVm, GradeLineVm, StudentDetailVm, StudentRowVm, map_student_detail,
    map_student_rows,
};
pub use time_fmt::{format_date, format_percent};
