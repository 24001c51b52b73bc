use std::sync::Arc;

use course_core::model::{
    AssignmentId, AuditEntry, AuditEntryId, NewAuditEntry, Score, StudentId, SubmissionStatus,
};
use course_core::time::fixed_clock;
use services::{ErrorKind, GradingDeps, GradingError, GradingSession};
use storage::repository::{AuditLog, StorageError, SubmissionRepository};
use storage::{InMemoryRepository, Storage, seeded_repository};

struct BrokenAudit;

impl AuditLog for BrokenAudit {
    fn append(&self, _entry: NewAuditEntry) -> Result<AuditEntryId, StorageError> {
        Err(StorageError::Connection("audit offline".into()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AuditEntry>, StorageError> {
        Ok(Vec::new())
    }
}

fn session(repo: &InMemoryRepository) -> GradingSession {
    let deps = GradingDeps::from_storage(&Storage::from_repository(repo));
    GradingSession::open(deps, "Profesor Titular", fixed_clock(), AssignmentId::new(1)).unwrap()
}

fn names(session: &GradingSession) -> Vec<String> {
    (0..session.submissions().len())
        .filter_map(|i| session.display_name(i))
        .collect()
}

#[test]
fn opening_selects_first_submission_and_loads_draft() {
    let repo = seeded_repository().unwrap();
    let session = session(&repo);

    assert_eq!(session.submissions().len(), 3);
    assert_eq!(session.selected_index(), Some(0));
    assert_eq!(session.draft().grade(), Some(90.0));
    assert_eq!(session.draft().feedback(), "Excelente trabajo, muy detallado.");
    assert!(!session.is_dirty());
    assert_eq!(session.rubric().map(|r| r.total_points()), Some(15));
}

#[test]
fn commit_grades_submission_and_writes_one_audit_entry() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);
    let before = repo.recent(100).unwrap().len();

    session.select_submission(StudentId::new(2)).unwrap();
    session.set_feedback("Bien");
    session.append_quick_comment("Buen trabajo");
    session.commit_grade(88.0).unwrap();

    let selected = session.selected_submission().unwrap();
    assert_eq!(selected.status(), SubmissionStatus::Graded);
    assert_eq!(selected.grade().map(Score::value), Some(88.0));
    assert_eq!(selected.feedback(), "Bien\n- Buen trabajo");
    assert!(!session.is_dirty());

    let stored = repo.list_submissions(AssignmentId::new(1)).unwrap();
    assert_eq!(stored[1].grade().map(Score::value), Some(88.0));

    let audit = repo.recent(100).unwrap();
    assert_eq!(audit.len(), before + 1);
    assert_eq!(audit[0].user, "Profesor Titular");
    assert_eq!(
        audit[0].action,
        "Graded \"Tarea 1 - Primeros Pasos\" for Juan Pérez (88/100)."
    );
}

#[test]
fn out_of_range_grades_leave_submission_untouched() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);
    session.select_submission(StudentId::new(2)).unwrap();

    for bad in [-1.0, 100.5, f64::NAN] {
        let err = session.commit_grade(bad).unwrap_err();
        assert!(matches!(err, GradingError::InvalidGrade(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert_eq!(
        session.selected_submission().unwrap().status(),
        SubmissionStatus::Ungraded
    );

    session.commit_grade(0.0).unwrap();
    session.select_submission(StudentId::new(1)).unwrap();
    session.commit_grade(100.0).unwrap();
}

#[test]
fn anonymous_toggle_renames_without_reordering() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);
    let original = names(&session);
    assert_eq!(original[0], "Ana López");

    session.toggle_anonymous();
    assert_eq!(names(&session), ["Student #1", "Student #2", "Student #3"]);
    assert_eq!(session.selected_index(), Some(0));

    session.toggle_anonymous();
    assert_eq!(names(&session), original);
}

#[test]
fn anonymous_grading_still_audits_real_name() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);
    session.toggle_anonymous();
    session.commit_grade(95.0).unwrap();

    let latest = repo.recent(1).unwrap();
    assert!(latest[0].action.contains("Ana López (95/100)"));
}

#[test]
fn unsaved_draft_blocks_switching_until_discarded() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);

    session.set_draft_grade(Some(70.0));
    let err = session.select_submission(StudentId::new(2)).unwrap_err();
    assert!(matches!(err, GradingError::UnsavedDraft(id) if id == StudentId::new(1)));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(session.selected_index(), Some(0));

    session.select_submission(StudentId::new(1)).unwrap();
    assert_eq!(session.draft().grade(), Some(70.0));

    session.discard_draft();
    assert_eq!(session.draft().grade(), Some(90.0));
    session.select_submission(StudentId::new(2)).unwrap();
    assert_eq!(session.draft().grade(), None);
    assert_eq!(session.draft().feedback(), "");
}

#[test]
fn commit_draft_requires_a_grade() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);
    session.select_submission(StudentId::new(2)).unwrap();

    assert!(matches!(
        session.commit_draft().unwrap_err(),
        GradingError::MissingGrade
    ));

    session.set_draft_grade(Some(77.5));
    session.commit_draft().unwrap();
    assert_eq!(
        session.selected_submission().unwrap().grade().map(Score::value),
        Some(77.5)
    );
}

#[test]
fn failed_audit_rolls_back_the_submission() {
    let repo = seeded_repository().unwrap();
    let mut deps = GradingDeps::from_storage(&Storage::from_repository(&repo));
    deps.audit = Arc::new(BrokenAudit);
    let mut session =
        GradingSession::open(deps, "Prof", fixed_clock(), AssignmentId::new(1)).unwrap();
    session.select_submission(StudentId::new(2)).unwrap();
    session.set_feedback("Nuevo");

    let err = session.commit_grade(60.0).unwrap_err();
    assert!(matches!(err, GradingError::Storage(StorageError::Connection(_))));

    let stored = repo.list_submissions(AssignmentId::new(1)).unwrap();
    assert_eq!(stored[1].status(), SubmissionStatus::Ungraded);
    assert_eq!(
        session.selected_submission().unwrap().status(),
        SubmissionStatus::Ungraded
    );
    assert_eq!(session.draft().feedback(), "Nuevo");
}

#[test]
fn switching_assignments_resets_draft_and_keeps_anonymous() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);
    session.toggle_anonymous();
    session.set_feedback("pendiente");

    session.select_assignment(AssignmentId::new(2)).unwrap();
    assert!(session.is_anonymous());
    assert_eq!(session.submissions().len(), 1);
    assert_eq!(session.draft().feedback(), "");
    assert!(session.rubric().is_none());

    session.select_assignment(AssignmentId::new(3)).unwrap();
    assert!(session.submissions().is_empty());
    assert_eq!(session.selected_index(), None);
    assert!(matches!(
        session.commit_grade(50.0).unwrap_err(),
        GradingError::NoSelection
    ));
}

#[test]
fn switching_assignments_refuses_an_unsaved_draft() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);
    session.set_draft_grade(Some(70.0));

    let err = session.switch_assignment(AssignmentId::new(2)).unwrap_err();
    assert!(matches!(err, GradingError::UnsavedDraft(id) if id == StudentId::new(1)));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(session.assignment_id(), Some(AssignmentId::new(1)));
    assert_eq!(session.draft().grade(), Some(70.0));

    // Re-picking the open assignment keeps the draft.
    session.switch_assignment(AssignmentId::new(1)).unwrap();
    assert!(session.is_dirty());

    session.discard_draft();
    session.switch_assignment(AssignmentId::new(2)).unwrap();
    assert_eq!(session.assignment_id(), Some(AssignmentId::new(2)));
    assert!(!session.is_dirty());
}

#[test]
fn unknown_ids_are_not_found_and_change_nothing() {
    let repo = seeded_repository().unwrap();
    let mut session = session(&repo);

    let err = session.select_assignment(AssignmentId::new(42)).unwrap_err();
    assert!(matches!(err, GradingError::AssignmentNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(session.assignment_id(), Some(AssignmentId::new(1)));

    let err = session.select_submission(StudentId::new(5)).unwrap_err();
    assert!(matches!(err, GradingError::SubmissionNotFound(_)));
    assert_eq!(session.selected_index(), Some(0));
}

#[test]
fn quick_comment_bank_comes_from_storage() {
    let repo = seeded_repository().unwrap();
    let session = session(&repo);
    assert_eq!(session.quick_comments().unwrap().len(), 5);
}
