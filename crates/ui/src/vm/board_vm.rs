use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use course_core::model::{CourseBoard, Student, StudentId};

use crate::vm::time_fmt::format_date;

fn format_naive(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnouncementVm {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// "Posted 2024-07-10" or "Scheduled for 2024-07-25 10:00".
    pub when: String,
    pub is_scheduled: bool,
}

/// Announcements in posting order. Scheduled ones stay listed for staff.
#[must_use]
pub fn map_announcements(board: &CourseBoard, today: NaiveDate) -> Vec<AnnouncementVm> {
    board
        .announcements
        .iter()
        .map(|a| {
            let is_scheduled = !a.is_visible_on(today);
            let when = match a.scheduled_for {
                Some(at) if is_scheduled => format!("Scheduled for {}", format_naive(at)),
                _ => format!("Posted {}", format_date(a.posted_on)),
            };
            AnnouncementVm {
                id: a.id,
                title: a.title.clone(),
                content: a.content.clone(),
                when,
                is_scheduled,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageVm {
    pub id: u64,
    pub from: String,
    pub subject: String,
    pub body: String,
    pub sent_at: String,
    pub unread: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboxVm {
    pub unread: usize,
    pub messages: Vec<MessageVm>,
}

/// Newest message first.
#[must_use]
pub fn map_inbox(board: &CourseBoard) -> InboxVm {
    let mut messages = board.messages.clone();
    messages.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
    InboxVm {
        unread: board.unread_messages(),
        messages: messages
            .into_iter()
            .map(|m| MessageVm {
                id: m.id,
                from: m.from,
                subject: m.subject,
                body: m.body,
                sent_at: format_naive(m.sent_at),
                unread: !m.is_read,
            })
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: u64,
    pub text: String,
    pub detail: String,
    pub options: Vec<String>,
}

#[must_use]
pub fn map_questions(board: &CourseBoard) -> Vec<QuestionVm> {
    board
        .questions
        .iter()
        .map(|q| QuestionVm {
            id: q.id,
            text: q.text.clone(),
            detail: format!("Type: {}, Answer: {}", q.kind.label(), q.correct_answer),
            options: q.options.clone(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupMemberVm {
    pub id: StudentId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupVm {
    pub id: u64,
    pub name: String,
    pub members: Vec<GroupMemberVm>,
}

/// Groups with member names looked up in the roster.
#[must_use]
pub fn map_groups(board: &CourseBoard, students: &[Student]) -> Vec<GroupVm> {
    let names: HashMap<StudentId, &str> = students.iter().map(|s| (s.id(), s.name())).collect();
    board
        .groups
        .iter()
        .map(|g| GroupVm {
            id: g.id,
            name: g.name.clone(),
            members: g
                .members
                .iter()
                .map(|id| GroupMemberVm {
                    id: *id,
                    name: names
                        .get(id)
                        .map_or_else(|| format!("Student {id}"), |name| (*name).to_owned()),
                })
                .collect(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecycledVm {
    pub id: u64,
    pub name: String,
    pub kind: String,
    pub deleted_on: String,
    pub purge_on: String,
}

#[must_use]
pub fn map_recycle_bin(board: &CourseBoard) -> Vec<RecycledVm> {
    board
        .recycled
        .iter()
        .map(|item| RecycledVm {
            id: item.id,
            name: item.name.clone(),
            kind: item.kind.clone(),
            deleted_on: format_date(item.deleted_on),
            purge_on: item.purge_on().map_or_else(String::new, format_date),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForumPostVm {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub replies: String,
    pub is_pinned: bool,
    pub is_locked: bool,
}

/// Pinned threads first, otherwise board order.
#[must_use]
pub fn map_forum(board: &CourseBoard) -> Vec<ForumPostVm> {
    let mut posts: Vec<_> = board.forum.iter().collect();
    posts.sort_by_key(|p| !p.is_pinned);
    posts
        .into_iter()
        .map(|p| ForumPostVm {
            id: p.id,
            title: p.title.clone(),
            author: p.author.clone(),
            content: p.content.clone(),
            replies: match p.replies {
                1 => "1 reply".to_owned(),
                n => format!("{n} replies"),
            },
            is_pinned: p.is_pinned,
            is_locked: p.is_locked,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryVm {
    pub id: u64,
    pub title: String,
    pub student_name: String,
    pub image_url: String,
}

#[must_use]
pub fn map_gallery(board: &CourseBoard) -> Vec<GalleryVm> {
    board
        .gallery
        .iter()
        .map(|p| GalleryVm {
            id: p.id,
            title: p.title.clone(),
            student_name: p.student_name.clone(),
            image_url: p.image_url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::time::fixed_clock;
    use services::AppServices;

    fn seeded() -> (CourseBoard, Vec<Student>) {
        let services = AppServices::seeded(fixed_clock(), "Prof").unwrap();
        (services.board().unwrap(), services.students().unwrap())
    }

    #[test]
    fn future_announcements_show_their_schedule() {
        let (board, _) = seeded();
        let vms = map_announcements(&board, fixed_clock().today());
        assert_eq!(vms[0].when, "Posted 2024-07-10");
        assert!(!vms[1].is_scheduled);
        assert_eq!(vms[2].when, "Scheduled for 2024-07-25 10:00");
        assert!(vms[2].is_scheduled);

        let later = NaiveDate::from_ymd_opt(2024, 7, 26).unwrap();
        assert_eq!(map_announcements(&board, later)[2].when, "Posted 2024-07-25");
    }

    #[test]
    fn inbox_is_newest_first_with_unread_count() {
        let (board, _) = seeded();
        let inbox = map_inbox(&board);
        assert_eq!(inbox.unread, 1);
        assert_eq!(inbox.messages[0].from, "Ana López");
        assert!(inbox.messages[0].unread);
        assert_eq!(inbox.messages[1].sent_at, "2024-07-22 15:00");
    }

    #[test]
    fn groups_resolve_member_names() {
        let (board, students) = seeded();
        let groups = map_groups(&board, &students);
        let alfa: Vec<_> = groups[0].members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(alfa, ["Ana López", "María García"]);

        let groups = map_groups(&board, &[]);
        assert_eq!(groups[2].members[0].name, "Student 4");
    }

    #[test]
    fn lists_carry_labels() {
        let (board, _) = seeded();
        assert_eq!(map_questions(&board)[1].detail, "Type: Multiple choice, Answer: Unión");
        assert_eq!(map_recycle_bin(&board)[1].purge_on, "2024-08-19");

        let forum = map_forum(&board);
        assert_eq!(forum[0].title, "Recordatorio: Entrega Tarea 1");
        assert_eq!(forum[0].replies, "0 replies");
        assert_eq!(forum[1].replies, "3 replies");

        assert_eq!(map_gallery(&board)[1].student_name, "Laura Rodríguez");
    }
}
