use course_core::model::{
    Assignment, AssignmentId, AuditEntry, AuditEntryId, CourseBoard, GradebookItem,
    GradebookItemId, NewAuditEntry, Rubric, Student, StudentId, Submission,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read access to the course roster.
pub trait RosterRepository: Send + Sync {
    /// Every enrolled student, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the roster cannot be read.
    fn list_students(&self) -> Result<Vec<Student>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the student is not enrolled.
    fn get_student(&self, id: StudentId) -> Result<Student, StorageError>;
}

pub trait AssignmentRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if assignments cannot be read.
    fn list_assignments(&self) -> Result<Vec<Assignment>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the assignment is unknown.
    fn get_assignment(&self, id: AssignmentId) -> Result<Assignment, StorageError>;
}

/// Per-assignment submission lists, kept in hand-in order.
pub trait SubmissionRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the assignment has no submission list.
    fn list_submissions(&self, assignment_id: AssignmentId)
    -> Result<Vec<Submission>, StorageError>;

    /// Replace the stored submission of the same student, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the assignment or the student's
    /// submission does not exist. Submissions are never created here.
    fn save_submission(
        &self,
        assignment_id: AssignmentId,
        submission: &Submission,
    ) -> Result<(), StorageError>;
}

pub trait RubricRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if rubrics cannot be read.
    fn rubric_for(&self, assignment_id: AssignmentId) -> Result<Option<Rubric>, StorageError>;
}

/// Gradebook columns in display order.
pub trait GradebookRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if items cannot be read.
    fn list_items(&self) -> Result<Vec<GradebookItem>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the item is unknown.
    fn get_item(&self, id: GradebookItemId) -> Result<GradebookItem, StorageError>;

    /// Overwrite an existing item in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the item is unknown.
    fn save_item(&self, item: &GradebookItem) -> Result<(), StorageError>;
}

/// Append-only log of grader actions.
pub trait AuditLog: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be recorded.
    fn append(&self, entry: NewAuditEntry) -> Result<AuditEntryId, StorageError>;

    /// Most recent entries first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read.
    fn recent(&self, limit: usize) -> Result<Vec<AuditEntry>, StorageError>;
}

/// Canned feedback snippets offered in the SpeedGrader.
pub trait CommentBank: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the bank cannot be read.
    fn quick_comments(&self) -> Result<Vec<String>, StorageError>;
}

/// Course material around the grading tools (modules, announcements, inbox, ...).
pub trait BoardRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the board cannot be read.
    fn board(&self) -> Result<CourseBoard, StorageError>;
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

/// In-memory course data for the desktop shell and for tests.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    students: Arc<Mutex<BTreeMap<StudentId, Student>>>,
    assignments: Arc<Mutex<BTreeMap<AssignmentId, Assignment>>>,
    submissions: Arc<Mutex<HashMap<AssignmentId, Vec<Submission>>>>,
    rubrics: Arc<Mutex<HashMap<AssignmentId, Rubric>>>,
    gradebook: Arc<Mutex<Vec<GradebookItem>>>,
    audit: Arc<Mutex<Vec<AuditEntry>>>,
    comments: Arc<Mutex<Vec<String>>>,
    board: Arc<Mutex<CourseBoard>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll or replace a student.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store is poisoned.
    pub fn insert_student(&self, student: Student) -> Result<(), StorageError> {
        lock(&self.students)?.insert(student.id(), student);
        Ok(())
    }

    /// Register an assignment with its submission list (possibly empty).
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if a student hands in twice.
    pub fn insert_assignment(
        &self,
        assignment: Assignment,
        submissions: Vec<Submission>,
    ) -> Result<(), StorageError> {
        let mut seen = std::collections::HashSet::new();
        if !submissions.iter().all(|s| seen.insert(s.student_id())) {
            return Err(StorageError::Conflict);
        }
        let id = assignment.id();
        lock(&self.assignments)?.insert(id, assignment);
        lock(&self.submissions)?.insert(id, submissions);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store is poisoned.
    pub fn insert_rubric(&self, rubric: Rubric) -> Result<(), StorageError> {
        lock(&self.rubrics)?.insert(rubric.assignment_id(), rubric);
        Ok(())
    }

    /// Append a gradebook column.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id is already used.
    pub fn insert_gradebook_item(&self, item: GradebookItem) -> Result<(), StorageError> {
        let mut guard = lock(&self.gradebook)?;
        if guard.iter().any(|existing| existing.id() == item.id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(item);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store is poisoned.
    pub fn set_quick_comments(
        &self,
        comments: impl IntoIterator<Item = String>,
    ) -> Result<(), StorageError> {
        let mut guard = lock(&self.comments)?;
        guard.clear();
        guard.extend(comments);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store is poisoned.
    pub fn set_board(&self, board: CourseBoard) -> Result<(), StorageError> {
        *lock(&self.board)? = board;
        Ok(())
    }
}

impl RosterRepository for InMemoryRepository {
    fn list_students(&self) -> Result<Vec<Student>, StorageError> {
        Ok(lock(&self.students)?.values().cloned().collect())
    }

    fn get_student(&self, id: StudentId) -> Result<Student, StorageError> {
        lock(&self.students)?
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

impl AssignmentRepository for InMemoryRepository {
    fn list_assignments(&self) -> Result<Vec<Assignment>, StorageError> {
        Ok(lock(&self.assignments)?.values().cloned().collect())
    }

    fn get_assignment(&self, id: AssignmentId) -> Result<Assignment, StorageError> {
        lock(&self.assignments)?
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

impl SubmissionRepository for InMemoryRepository {
    fn list_submissions(
        &self,
        assignment_id: AssignmentId,
    ) -> Result<Vec<Submission>, StorageError> {
        lock(&self.submissions)?
            .get(&assignment_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn save_submission(
        &self,
        assignment_id: AssignmentId,
        submission: &Submission,
    ) -> Result<(), StorageError> {
        let mut guard = lock(&self.submissions)?;
        let list = guard
            .get_mut(&assignment_id)
            .ok_or(StorageError::NotFound)?;
        let slot = list
            .iter_mut()
            .find(|s| s.student_id() == submission.student_id())
            .ok_or(StorageError::NotFound)?;
        *slot = submission.clone();
        Ok(())
    }
}

impl RubricRepository for InMemoryRepository {
    fn rubric_for(&self, assignment_id: AssignmentId) -> Result<Option<Rubric>, StorageError> {
        Ok(lock(&self.rubrics)?.get(&assignment_id).cloned())
    }
}

impl GradebookRepository for InMemoryRepository {
    fn list_items(&self) -> Result<Vec<GradebookItem>, StorageError> {
        Ok(lock(&self.gradebook)?.clone())
    }

    fn get_item(&self, id: GradebookItemId) -> Result<GradebookItem, StorageError> {
        lock(&self.gradebook)?
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn save_item(&self, item: &GradebookItem) -> Result<(), StorageError> {
        let mut guard = lock(&self.gradebook)?;
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or(StorageError::NotFound)?;
        *slot = item.clone();
        Ok(())
    }
}

impl AuditLog for InMemoryRepository {
    fn append(&self, entry: NewAuditEntry) -> Result<AuditEntryId, StorageError> {
        let mut guard = lock(&self.audit)?;
        let next = u64::try_from(guard.len())
            .map_err(|e| StorageError::Serialization(e.to_string()))?
            + 1;
        let id = AuditEntryId::new(next);
        guard.push(AuditEntry::from_new(id, entry));
        Ok(id)
    }

    fn recent(&self, limit: usize) -> Result<Vec<AuditEntry>, StorageError> {
        Ok(lock(&self.audit)?.iter().rev().take(limit).cloned().collect())
    }
}

impl CommentBank for InMemoryRepository {
    fn quick_comments(&self) -> Result<Vec<String>, StorageError> {
        Ok(lock(&self.comments)?.clone())
    }
}

impl BoardRepository for InMemoryRepository {
    fn board(&self) -> Result<CourseBoard, StorageError> {
        Ok(lock(&self.board)?.clone())
    }
}

/// Bundles every repository behind trait objects so services can be wired
/// against any backend.
#[derive(Clone)]
pub struct Storage {
    pub roster: Arc<dyn RosterRepository>,
    pub assignments: Arc<dyn AssignmentRepository>,
    pub submissions: Arc<dyn SubmissionRepository>,
    pub rubrics: Arc<dyn RubricRepository>,
    pub gradebook: Arc<dyn GradebookRepository>,
    pub audit: Arc<dyn AuditLog>,
    pub comments: Arc<dyn CommentBank>,
    pub board: Arc<dyn BoardRepository>,
}

impl Storage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(&InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: &InMemoryRepository) -> Self {
        Self {
            roster: Arc::new(repo.clone()),
            assignments: Arc::new(repo.clone()),
            submissions: Arc::new(repo.clone()),
            rubrics: Arc::new(repo.clone()),
            gradebook: Arc::new(repo.clone()),
            audit: Arc::new(repo.clone()),
            comments: Arc::new(repo.clone()),
            board: Arc::new(repo.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::Score;
    use course_core::time::fixed_now;

    fn assignment(id: u64) -> Assignment {
        Assignment::new(AssignmentId::new(id), format!("Tarea {id}")).unwrap()
    }

    #[test]
    fn save_submission_keeps_position() {
        let repo = InMemoryRepository::new();
        let subs = vec![
            Submission::ungraded(StudentId::new(3), "f3"),
            Submission::ungraded(StudentId::new(1), "f1"),
        ];
        repo.insert_assignment(assignment(1), subs).unwrap();

        let mut graded = Submission::ungraded(StudentId::new(1), "f1");
        graded.record_grade(Score::new(88.0).unwrap(), "ok");
        repo.save_submission(AssignmentId::new(1), &graded).unwrap();

        let listed = repo.list_submissions(AssignmentId::new(1)).unwrap();
        assert_eq!(listed[0].student_id(), StudentId::new(3));
        assert_eq!(listed[1].grade().map(Score::value), Some(88.0));
    }

    #[test]
    fn save_submission_never_creates() {
        let repo = InMemoryRepository::new();
        repo.insert_assignment(assignment(1), Vec::new()).unwrap();
        let err = repo
            .save_submission(
                AssignmentId::new(1),
                &Submission::ungraded(StudentId::new(9), "f9"),
            )
            .unwrap_err();
        assert_eq!(err, StorageError::NotFound);
        assert!(repo.list_submissions(AssignmentId::new(1)).unwrap().is_empty());
    }

    #[test]
    fn duplicate_hand_in_is_a_conflict() {
        let repo = InMemoryRepository::new();
        let subs = vec![
            Submission::ungraded(StudentId::new(1), "a"),
            Submission::ungraded(StudentId::new(1), "b"),
        ];
        assert_eq!(
            repo.insert_assignment(assignment(1), subs).unwrap_err(),
            StorageError::Conflict
        );
    }

    #[test]
    fn audit_ids_are_sequential_and_recent_is_newest_first() {
        let repo = InMemoryRepository::new();
        let first = repo
            .append(NewAuditEntry::new("Prof", "one", fixed_now()))
            .unwrap();
        let second = repo
            .append(NewAuditEntry::new("Prof", "two", fixed_now()))
            .unwrap();
        assert_eq!(first, AuditEntryId::new(1));
        assert_eq!(second, AuditEntryId::new(2));

        let recent = repo.recent(1).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].action, "two");
    }

    #[test]
    fn unknown_lookups_are_not_found() {
        let repo = InMemoryRepository::new();
        assert_eq!(
            repo.get_student(StudentId::new(1)).unwrap_err(),
            StorageError::NotFound
        );
        assert_eq!(
            repo.list_submissions(AssignmentId::new(1)).unwrap_err(),
            StorageError::NotFound
        );
        assert_eq!(
            repo.get_item(GradebookItemId::new(1)).unwrap_err(),
            StorageError::NotFound
        );
        assert!(repo.rubric_for(AssignmentId::new(1)).unwrap().is_none());
    }
}
