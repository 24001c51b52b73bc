use std::collections::HashMap;
use std::sync::Arc;

use course_core::model::{
    Assignment, AssignmentId, NewAuditEntry, Rubric, Score, StudentId, Submission,
};
use storage::repository::{
    AssignmentRepository, AuditLog, CommentBank, RosterRepository, RubricRepository, Storage,
    StorageError, SubmissionRepository,
};
use tracing::{debug, error, info, warn};

use super::draft::Draft;
use crate::Clock;
use crate::error::GradingError;

/// Repositories a grading session reads from and writes to.
#[derive(Clone)]
pub struct GradingDeps {
    pub roster: Arc<dyn RosterRepository>,
    pub assignments: Arc<dyn AssignmentRepository>,
    pub submissions: Arc<dyn SubmissionRepository>,
    pub rubrics: Arc<dyn RubricRepository>,
    pub audit: Arc<dyn AuditLog>,
    pub comments: Arc<dyn CommentBank>,
}

impl GradingDeps {
    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            roster: Arc::clone(&storage.roster),
            assignments: Arc::clone(&storage.assignments),
            submissions: Arc::clone(&storage.submissions),
            rubrics: Arc::clone(&storage.rubrics),
            audit: Arc::clone(&storage.audit),
            comments: Arc::clone(&storage.comments),
        }
    }
}

/// Instructor review of one assignment's submissions at a time.
///
/// Edits go into a [`Draft`] and only reach the submission on
/// [`commit_grade`](Self::commit_grade). Switching to another submission while
/// the draft differs from the committed values is refused with
/// [`GradingError::UnsavedDraft`]; call [`discard_draft`](Self::discard_draft)
/// or commit first. Switching assignments always drops the draft.
pub struct GradingSession {
    deps: GradingDeps,
    grader: String,
    clock: Clock,
    assignment: Option<Assignment>,
    rubric: Option<Rubric>,
    submissions: Vec<Submission>,
    names: HashMap<StudentId, String>,
    selected: Option<usize>,
    anonymous: bool,
    draft: Draft,
}

impl GradingSession {
    /// Session with no assignment open yet.
    #[must_use]
    pub fn new(deps: GradingDeps, grader: impl Into<String>, clock: Clock) -> Self {
        Self {
            deps,
            grader: grader.into(),
            clock,
            assignment: None,
            rubric: None,
            submissions: Vec::new(),
            names: HashMap::new(),
            selected: None,
            anonymous: false,
            draft: Draft::default(),
        }
    }

    /// Build a session and open `assignment_id` right away.
    ///
    /// # Errors
    ///
    /// Same as [`select_assignment`](Self::select_assignment).
    pub fn open(
        deps: GradingDeps,
        grader: impl Into<String>,
        clock: Clock,
        assignment_id: AssignmentId,
    ) -> Result<Self, GradingError> {
        let mut session = Self::new(deps, grader, clock);
        session.select_assignment(assignment_id)?;
        Ok(session)
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    #[must_use]
    pub fn assignment_id(&self) -> Option<AssignmentId> {
        self.assignment.as_ref().map(Assignment::id)
    }

    /// Submissions in hand-in order.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_submission(&self) -> Option<&Submission> {
        self.selected.and_then(|i| self.submissions.get(i))
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    #[must_use]
    pub fn grader(&self) -> &str {
        &self.grader
    }

    /// Rubric attached to the open assignment, if any.
    #[must_use]
    pub fn rubric(&self) -> Option<&Rubric> {
        self.rubric.as_ref()
    }

    /// True when the draft holds edits that are not committed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match self.selected_submission() {
            Some(submission) => !self.draft.matches(submission),
            None => self.draft != Draft::default(),
        }
    }

    /// Name to show for the submission at `index`.
    ///
    /// While anonymous grading is on this is `Student #<position>`, 1-based.
    #[must_use]
    pub fn display_name(&self, index: usize) -> Option<String> {
        let submission = self.submissions.get(index)?;
        if self.anonymous {
            return Some(format!("Student #{}", index + 1));
        }
        Some(self.real_name(submission.student_id()))
    }

    /// Display name of the selected submission.
    #[must_use]
    pub fn selected_display_name(&self) -> Option<String> {
        self.selected.and_then(|i| self.display_name(i))
    }

    /// Assignments that can be opened in this session.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::Storage` if the list cannot be read.
    pub fn available_assignments(&self) -> Result<Vec<Assignment>, GradingError> {
        Ok(self.deps.assignments.list_assignments()?)
    }

    /// The canned comment bank.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::Storage` if the bank cannot be read.
    pub fn quick_comments(&self) -> Result<Vec<String>, GradingError> {
        Ok(self.deps.comments.quick_comments()?)
    }

    fn real_name(&self, student_id: StudentId) -> String {
        self.names
            .get(&student_id)
            .cloned()
            .unwrap_or_else(|| format!("Student {student_id}"))
    }

    //
    // ─── SELECTION ─────────────────────────────────────────────────────────────
    //

    /// Open another assignment.
    ///
    /// Selects the first submission (or nothing for an empty list) and resets
    /// the draft to its committed values. The anonymous toggle is kept.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::AssignmentNotFound` if the assignment has no
    /// submission list. State is untouched on error.
    pub fn select_assignment(&mut self, id: AssignmentId) -> Result<(), GradingError> {
        let submissions = self
            .deps
            .submissions
            .list_submissions(id)
            .map_err(|err| not_found_as(err, GradingError::AssignmentNotFound(id)))?;
        let assignment = self
            .deps
            .assignments
            .get_assignment(id)
            .map_err(|err| not_found_as(err, GradingError::AssignmentNotFound(id)))?;
        let rubric = self.deps.rubrics.rubric_for(id)?;
        let names = self
            .deps
            .roster
            .list_students()?
            .into_iter()
            .map(|s| (s.id(), s.name().to_owned()))
            .collect();

        if self.is_dirty() {
            debug!(assignment = %id, "dropping unsaved draft on assignment switch");
        }

        self.selected = if submissions.is_empty() { None } else { Some(0) };
        self.submissions = submissions;
        self.assignment = Some(assignment);
        self.rubric = rubric;
        self.names = names;
        self.draft = self
            .selected_submission()
            .map(Draft::from_submission)
            .unwrap_or_default();

        debug!(
            assignment = %id,
            submissions = self.submissions.len(),
            "assignment opened"
        );
        Ok(())
    }

    /// Open another assignment unless that would drop an unsaved draft.
    ///
    /// Picking the assignment that is already open is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::UnsavedDraft` while the current draft has
    /// uncommitted edits, otherwise whatever
    /// [`select_assignment`](Self::select_assignment) returns.
    pub fn switch_assignment(&mut self, id: AssignmentId) -> Result<(), GradingError> {
        if self.assignment_id() == Some(id) {
            return Ok(());
        }
        if self.is_dirty() {
            if let Some(pending) = self.selected_submission().map(Submission::student_id) {
                warn!(student = %pending, assignment = %id, "refusing assignment switch with unsaved draft");
                return Err(GradingError::UnsavedDraft(pending));
            }
        }
        self.select_assignment(id)
    }

    /// Focus the submission handed in by `student_id`.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::SubmissionNotFound` if the student has no
    /// submission here, and `GradingError::UnsavedDraft` if the current draft
    /// has uncommitted edits.
    pub fn select_submission(&mut self, student_id: StudentId) -> Result<(), GradingError> {
        let Some(index) = self
            .submissions
            .iter()
            .position(|s| s.student_id() == student_id)
        else {
            warn!(student = %student_id, "no submission for student");
            return Err(GradingError::SubmissionNotFound(student_id));
        };

        if self.selected == Some(index) {
            return Ok(());
        }

        if self.is_dirty() {
            let pending = self
                .selected_submission()
                .map_or(student_id, Submission::student_id);
            warn!(student = %pending, "refusing to switch with unsaved draft");
            return Err(GradingError::UnsavedDraft(pending));
        }

        self.selected = Some(index);
        self.draft = Draft::from_submission(&self.submissions[index]);
        debug!(student = %student_id, index, "submission selected");
        Ok(())
    }

    /// Flip anonymous (blind) grading. Display-only.
    pub fn toggle_anonymous(&mut self) {
        self.anonymous = !self.anonymous;
        debug!(anonymous = self.anonymous, "anonymous grading toggled");
    }

    //
    // ─── DRAFT ─────────────────────────────────────────────────────────────────
    //

    pub fn set_draft_grade(&mut self, grade: Option<f64>) {
        self.draft.set_grade(grade);
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.draft.set_feedback(feedback.into());
    }

    /// Append `"\n- " + text` to the draft feedback.
    pub fn append_quick_comment(&mut self, text: &str) {
        self.draft.append_quick_comment(text);
    }

    /// Throw away uncommitted edits.
    pub fn discard_draft(&mut self) {
        self.draft = self
            .selected_submission()
            .map(Draft::from_submission)
            .unwrap_or_default();
    }

    //
    // ─── COMMIT ────────────────────────────────────────────────────────────────
    //

    /// Commit the draft using its typed grade.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::MissingGrade` when no grade was typed, otherwise
    /// the errors of [`commit_grade`](Self::commit_grade).
    pub fn commit_draft(&mut self) -> Result<(), GradingError> {
        let value = self.draft.grade().ok_or(GradingError::MissingGrade)?;
        self.commit_grade(value)
    }

    /// Grade the selected submission with `value` and the draft feedback.
    ///
    /// The submission is saved and one audit entry is appended. If the audit
    /// append fails the saved submission is restored, so either both effects
    /// land or neither does.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::InvalidGrade` unless `value` is within `0..=100`,
    /// `GradingError::NoSelection` without a selected submission, and
    /// `GradingError::Storage` if persistence fails.
    pub fn commit_grade(&mut self, value: f64) -> Result<(), GradingError> {
        let score = Score::new(value).inspect_err(|err| {
            warn!(%err, "rejected grade");
        })?;
        let (Some(index), Some(assignment)) = (self.selected, self.assignment.as_ref()) else {
            return Err(GradingError::NoSelection);
        };
        let assignment_id = assignment.id();
        let action = format!(
            "Graded \"{}\" for {} ({}/100).",
            assignment.title(),
            self.real_name(self.submissions[index].student_id()),
            score
        );

        let previous = self.submissions[index].clone();
        let mut updated = previous.clone();
        updated.record_grade(score, self.draft.feedback());

        self.deps
            .submissions
            .save_submission(assignment_id, &updated)?;

        let entry = NewAuditEntry::new(self.grader.clone(), action, self.clock.now());
        if let Err(err) = self.deps.audit.append(entry) {
            if let Err(rollback) = self.deps.submissions.save_submission(assignment_id, &previous) {
                error!(%rollback, "failed to restore submission after audit failure");
            }
            warn!(%err, "audit append failed, grade not committed");
            return Err(err.into());
        }

        info!(
            assignment = %assignment_id,
            student = %updated.student_id(),
            grade = score.value(),
            "grade committed"
        );
        self.draft = Draft::from_submission(&updated);
        self.submissions[index] = updated;
        Ok(())
    }
}

fn not_found_as(err: StorageError, not_found: GradingError) -> GradingError {
    match err {
        StorageError::NotFound => {
            warn!(%not_found, "lookup failed");
            not_found
        }
        other => GradingError::Storage(other),
    }
}
