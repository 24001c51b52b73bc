//! Read-only course material shown around the grading tools: modules and
//! lessons, announcements, messages, the question bank, groups, staff,
//! the recycle bin, forum threads and the project gallery.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::ids::StudentId;

/// Days an item stays in the recycle bin before it is purged.
pub const RECYCLE_RETENTION_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonKind {
    Video,
    Lecture,
    Assignment,
    Project,
    Quiz,
}

impl LessonKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LessonKind::Video => "Video",
            LessonKind::Lecture => "Lecture",
            LessonKind::Assignment => "Assignment",
            LessonKind::Project => "Project",
            LessonKind::Quiz => "Quiz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    pub kind: LessonKind,
    /// Unlocks once the previous lesson is completed.
    pub is_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: u64,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub posted_on: NaiveDate,
    pub scheduled_for: Option<NaiveDateTime>,
}

impl Announcement {
    /// Whether students can see the announcement on `today`.
    #[must_use]
    pub fn is_visible_on(&self, today: NaiveDate) -> bool {
        self.scheduled_for
            .map_or(self.posted_on, |at| at.date())
            <= today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    TrueFalse,
    MultipleChoice,
    ShortAnswer,
}

impl QuestionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::TrueFalse => "True/False",
            QuestionKind::MultipleChoice => "Multiple choice",
            QuestionKind::ShortAnswer => "Short answer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub kind: QuestionKind,
    pub text: String,
    /// Only multiple-choice questions carry options.
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGroup {
    pub id: u64,
    pub name: String,
    pub members: Vec<StudentId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub from: String,
    pub subject: String,
    pub body: String,
    pub sent_at: NaiveDateTime,
    pub is_read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Instructor,
    CoInstructor,
    Assistant,
}

impl StaffRole {
    pub const ALL: [StaffRole; 3] = [
        StaffRole::Instructor,
        StaffRole::CoInstructor,
        StaffRole::Assistant,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StaffRole::Instructor => "Instructor",
            StaffRole::CoInstructor => "Co-instructor",
            StaffRole::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycledItem {
    pub id: u64,
    pub name: String,
    pub kind: String,
    pub deleted_on: NaiveDate,
}

impl RecycledItem {
    /// Day the item is removed for good.
    #[must_use]
    pub fn purge_on(&self) -> Option<NaiveDate> {
        self.deleted_on
            .checked_add_days(Days::new(RECYCLE_RETENTION_DAYS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub replies: u32,
    pub is_pinned: bool,
    pub is_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryProject {
    pub id: u64,
    pub student_name: String,
    pub title: String,
    pub image_url: String,
}

/// Everything on the course board, as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseBoard {
    pub title: String,
    pub modules: Vec<CourseModule>,
    pub announcements: Vec<Announcement>,
    pub questions: Vec<Question>,
    pub groups: Vec<StudentGroup>,
    pub messages: Vec<Message>,
    pub staff: Vec<StaffMember>,
    pub recycled: Vec<RecycledItem>,
    pub forum: Vec<ForumPost>,
    pub gallery: Vec<GalleryProject>,
}

impl CourseBoard {
    /// Lessons across all modules, in module order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> + '_ {
        self.modules.iter().flat_map(|module| module.lessons.iter())
    }

    #[must_use]
    pub fn unread_messages(&self) -> usize {
        self.messages.iter().filter(|m| !m.is_read).count()
    }

    #[must_use]
    pub fn visible_announcements(&self, today: NaiveDate) -> usize {
        self.announcements
            .iter()
            .filter(|a| a.is_visible_on(today))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn announcement(posted: NaiveDate, scheduled: Option<NaiveDateTime>) -> Announcement {
        Announcement {
            id: 1,
            title: "Aviso".into(),
            content: String::new(),
            posted_on: posted,
            scheduled_for: scheduled,
        }
    }

    #[test]
    fn scheduled_announcements_wait_for_their_date() {
        let today = day(2024, 7, 23);
        let at = day(2024, 7, 25).and_hms_opt(10, 0, 0).unwrap();
        assert!(announcement(day(2024, 7, 10), None).is_visible_on(today));
        assert!(!announcement(day(2024, 7, 25), Some(at)).is_visible_on(today));
        assert!(announcement(day(2024, 7, 25), Some(at)).is_visible_on(day(2024, 7, 25)));
    }

    #[test]
    fn recycled_items_purge_after_retention() {
        let item = RecycledItem {
            id: 1,
            name: "Borrador".into(),
            kind: "Anuncio".into(),
            deleted_on: day(2024, 7, 21),
        };
        assert_eq!(item.purge_on(), Some(day(2024, 8, 20)));
    }

    #[test]
    fn board_counts() {
        let lesson = |id, title: &str| Lesson {
            id,
            title: title.into(),
            kind: LessonKind::Video,
            is_locked: false,
        };
        let message = |id, is_read| Message {
            id,
            from: "Ana".into(),
            subject: "Hola".into(),
            body: String::new(),
            sent_at: day(2024, 7, 23).and_hms_opt(10, 30, 0).unwrap(),
            is_read,
        };
        let board = CourseBoard {
            modules: vec![
                CourseModule { id: 1, title: "M1".into(), lessons: vec![lesson(101, "a"), lesson(102, "b")] },
                CourseModule { id: 2, title: "M2".into(), lessons: vec![lesson(201, "c")] },
            ],
            messages: vec![message(1, false), message(2, true)],
            ..CourseBoard::default()
        };
        let ids: Vec<u64> = board.lessons().map(|l| l.id).collect();
        assert_eq!(ids, vec![101, 102, 201]);
        assert_eq!(board.unread_messages(), 1);
        assert_eq!(board.visible_announcements(day(2024, 7, 23)), 0);
    }
}
