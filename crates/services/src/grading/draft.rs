use course_core::model::{Score, Submission};

/// Uncommitted grade and feedback for the selected submission.
///
/// The grade is kept as typed (unvalidated) until it is committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    grade: Option<f64>,
    feedback: String,
}

impl Draft {
    /// Draft holding the submission's committed values.
    #[must_use]
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            grade: submission.grade().map(Score::value),
            feedback: submission.feedback().to_owned(),
        }
    }

    #[must_use]
    pub fn grade(&self) -> Option<f64> {
        self.grade
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub(crate) fn set_grade(&mut self, grade: Option<f64>) {
        self.grade = grade;
    }

    pub(crate) fn set_feedback(&mut self, feedback: String) {
        self.feedback = feedback;
    }

    pub(crate) fn append_quick_comment(&mut self, comment: &str) {
        self.feedback.push_str("\n- ");
        self.feedback.push_str(comment);
    }

    /// True when the draft equals what is already committed on `submission`.
    #[must_use]
    pub fn matches(&self, submission: &Submission) -> bool {
        self.grade == submission.grade().map(Score::value) && self.feedback == submission.feedback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::StudentId;

    #[test]
    fn quick_comment_on_empty_feedback() {
        let mut draft = Draft::default();
        draft.append_quick_comment("Buen trabajo");
        assert_eq!(draft.feedback(), "\n- Buen trabajo");
    }

    #[test]
    fn quick_comments_accumulate_without_dedup() {
        let mut draft = Draft::default();
        draft.set_feedback("Bien".into());
        draft.append_quick_comment("A");
        draft.append_quick_comment("A");
        assert_eq!(draft.feedback(), "Bien\n- A\n- A");
    }

    #[test]
    fn matches_tracks_grade_and_feedback() {
        let submission = Submission::graded(
            StudentId::new(1),
            "f",
            Score::new(90.0).unwrap(),
            "Excelente",
        );
        let mut draft = Draft::from_submission(&submission);
        assert!(draft.matches(&submission));

        draft.set_grade(Some(91.0));
        assert!(!draft.matches(&submission));
        draft.set_grade(Some(90.0));
        draft.set_feedback("Excelente!".into());
        assert!(!draft.matches(&submission));
    }
}
