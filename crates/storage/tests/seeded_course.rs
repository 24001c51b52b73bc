use chrono::NaiveDate;
use course_core::model::{
    AssignmentId, GradeCategory, LessonKind, QuestionKind, Score, StaffRole, StudentId,
    SubmissionStatus,
};
use storage::fixtures::QUICK_COMMENTS;
use storage::repository::{
    AssignmentRepository, AuditLog, BoardRepository, CommentBank, GradebookRepository, RosterRepository,
    RubricRepository, SubmissionRepository,
};
use storage::seeded_repository;

#[test]
fn seeded_course_has_roster_and_assignments() {
    let repo = seeded_repository().expect("seed");

    let students = repo.list_students().unwrap();
    assert_eq!(students.len(), 5);
    assert_eq!(students[0].name(), "Ana López");

    let assignments = repo.list_assignments().unwrap();
    let titles: Vec<_> = assignments.iter().map(|a| a.title().to_owned()).collect();
    assert_eq!(
        titles,
        ["Tarea 1 - Primeros Pasos", "Proyecto de Módulo 2", "Proyecto Final"]
    );
}

#[test]
fn seeded_submissions_keep_hand_in_order_and_status() {
    let repo = seeded_repository().expect("seed");

    let first = repo.list_submissions(AssignmentId::new(1)).unwrap();
    let order: Vec<_> = first.iter().map(|s| s.student_id()).collect();
    assert_eq!(order, [StudentId::new(1), StudentId::new(2), StudentId::new(3)]);
    assert_eq!(first[1].status(), SubmissionStatus::Ungraded);
    assert_eq!(first[2].grade().map(Score::value), Some(100.0));

    assert!(repo.list_submissions(AssignmentId::new(3)).unwrap().is_empty());
}

#[test]
fn seeded_gradebook_matches_course_weights() {
    let repo = seeded_repository().expect("seed");
    let items = repo.list_items().unwrap();
    assert_eq!(items.len(), 4);

    let published: Vec<_> = items
        .iter()
        .filter(|i| i.is_published())
        .map(|i| i.title().to_owned())
        .collect();
    assert_eq!(published, ["Tarea 1", "Proyecto de Módulo 2"]);

    let projects: f64 = items
        .iter()
        .filter(|i| i.category() == GradeCategory::Projects)
        .map(|i| i.weight().value())
        .sum();
    assert_eq!(projects, 55.0);
}

#[test]
fn seeded_extras_are_available() {
    let repo = seeded_repository().expect("seed");

    let rubric = repo.rubric_for(AssignmentId::new(1)).unwrap().expect("rubric");
    assert_eq!(rubric.total_points(), 15);
    assert!(repo.rubric_for(AssignmentId::new(2)).unwrap().is_none());

    assert_eq!(repo.quick_comments().unwrap().len(), QUICK_COMMENTS.len());

    let log = repo.recent(10).unwrap();
    assert_eq!(log.len(), 3);
    assert!(log[0].action.starts_with("Graded"));
}

#[test]
fn seeded_board_carries_course_material() {
    let repo = seeded_repository().expect("seed");
    let board = repo.board().unwrap();

    assert_eq!(board.title, "Diseño Asistido por Computadora (CAD)");
    assert_eq!(board.modules.len(), 2);
    let locked: Vec<_> = board.lessons().filter(|l| l.is_locked).map(|l| l.id).collect();
    assert_eq!(locked, [202, 203, 204]);
    assert_eq!(board.modules[1].lessons[3].kind, LessonKind::Quiz);

    let today = NaiveDate::from_ymd_opt(2024, 7, 23).unwrap();
    assert_eq!(board.announcements.len(), 3);
    assert_eq!(board.visible_announcements(today), 2);

    assert_eq!(board.questions[1].kind, QuestionKind::MultipleChoice);
    assert_eq!(board.questions[1].options.len(), 3);
    assert_eq!(board.groups[1].members, [StudentId::new(2), StudentId::new(5)]);
    assert_eq!(board.unread_messages(), 1);
    assert_eq!(board.staff[2].role, StaffRole::CoInstructor);
    assert_eq!(
        board.recycled[0].purge_on(),
        NaiveDate::from_ymd_opt(2024, 8, 20)
    );
    assert!(board.forum[1].is_pinned && board.forum[1].is_locked);
    assert_eq!(board.gallery.len(), 3);
}

#[test]
fn board_replaces_on_set() {
    let repo = storage::InMemoryRepository::new();
    assert_eq!(repo.board().unwrap(), Default::default());

    let mut board = seeded_repository().expect("seed").board().unwrap();
    board.messages.clear();
    repo.set_board(board).unwrap();
    assert_eq!(repo.board().unwrap().unread_messages(), 0);
}
