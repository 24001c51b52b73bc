mod assignment;
mod audit;
pub mod board;
mod gradebook;
mod ids;
pub mod rubric;
mod score;
mod student;

pub use ids::{AssignmentId, AuditEntryId, GradebookItemId, ParseIdError, StudentId};
pub use score::{MAX_PERCENT, Score, ScoreError, Weight, WeightError, round_one_decimal};

pub use assignment::{Assignment, AssignmentError, Submission, SubmissionStatus};
pub use audit::{AuditEntry, NewAuditEntry};
pub use board::{
    Announcement, CourseBoard, CourseModule, ForumPost, GalleryProject, Lesson, LessonKind, Message,
    Question, QuestionKind, RECYCLE_RETENTION_DAYS, RecycledItem, StaffMember, StaffRole,
    StudentGroup,
};
pub use gradebook::{GradeCategory, GradebookItem, GradebookItemError};
pub use rubric::{Criterion, Rating, Rubric, RubricError};
pub use student::{Progress, Student, StudentError};
