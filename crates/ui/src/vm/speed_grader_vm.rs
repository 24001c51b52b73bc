use course_core::model::{Assignment, AssignmentId, Rubric, StudentId, SubmissionStatus};
use services::GradingSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentOptionVm {
    pub id: AssignmentId,
    pub title: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRowVm {
    pub student_id: StudentId,
    pub display_name: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedSubmissionVm {
    pub display_name: String,
    pub file_url: String,
    pub status_label: &'static str,
}

/// Everything the SpeedGrader screen renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeedGraderVm {
    pub assignments: Vec<AssignmentOptionVm>,
    pub anonymous: bool,
    pub rows: Vec<SubmissionRowVm>,
    pub selected: Option<SelectedSubmissionVm>,
    /// Draft grade as it goes into the number input.
    pub grade_input: String,
    pub feedback: String,
    pub dirty: bool,
    pub has_rubric: bool,
}

fn status_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Graded => "badge badge-graded",
        SubmissionStatus::Ungraded => "badge badge-pending",
    }
}

#[must_use]
pub fn map_speed_grader(session: &GradingSession, assignments: &[Assignment]) -> SpeedGraderVm {
    let current = session.assignment_id();
    let rows = session
        .submissions()
        .iter()
        .enumerate()
        .map(|(index, submission)| SubmissionRowVm {
            student_id: submission.student_id(),
            display_name: session.display_name(index).unwrap_or_default(),
            status_label: submission.status().label(),
            status_class: status_class(submission.status()),
            selected: session.selected_index() == Some(index),
        })
        .collect();

    let selected = session.selected_submission().map(|submission| SelectedSubmissionVm {
        display_name: session.selected_display_name().unwrap_or_default(),
        file_url: submission.file_url().to_owned(),
        status_label: submission.status().label(),
    });

    SpeedGraderVm {
        assignments: assignments
            .iter()
            .map(|a| AssignmentOptionVm {
                id: a.id(),
                title: a.title().to_owned(),
                selected: Some(a.id()) == current,
            })
            .collect(),
        anonymous: session.is_anonymous(),
        rows,
        selected,
        grade_input: session
            .draft()
            .grade()
            .map(|g| g.to_string())
            .unwrap_or_default(),
        feedback: session.draft().feedback().to_owned(),
        dirty: session.is_dirty(),
        has_rubric: session.rubric().is_some(),
    }
}

/// Blank input clears the draft grade; anything unparsable does too.
#[must_use]
pub fn parse_grade_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse().ok()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriterionVm {
    pub description: String,
    pub points_label: String,
    pub ratings: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RubricVm {
    pub criteria: Vec<CriterionVm>,
    pub total_label: String,
}

#[must_use]
pub fn map_rubric(rubric: &Rubric) -> RubricVm {
    RubricVm {
        criteria: rubric
            .criteria()
            .iter()
            .map(|c| CriterionVm {
                description: c.description().to_owned(),
                points_label: format!("{} pts.", c.max_points()),
                ratings: c
                    .ratings()
                    .iter()
                    .map(|r| format!("{} ({} pts)", r.description, r.points))
                    .collect(),
            })
            .collect(),
        total_label: format!("Total: {} pts.", rubric.total_points()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::time::fixed_clock;
    use services::GradingDeps;
    use storage::Storage;
    use storage::repository::AssignmentRepository;

    fn session() -> (GradingSession, Vec<Assignment>) {
        let storage = Storage::seeded().unwrap();
        let assignments = storage.assignments.list_assignments().unwrap();
        let session = GradingSession::open(
            GradingDeps::from_storage(&storage),
            "Prof",
            fixed_clock(),
            AssignmentId::new(1),
        )
        .unwrap();
        (session, assignments)
    }

    #[test]
    fn maps_rows_and_selection() {
        let (session, assignments) = session();
        let vm = map_speed_grader(&session, &assignments);

        assert_eq!(vm.assignments.len(), 3);
        assert!(vm.assignments[0].selected);
        assert_eq!(vm.rows.len(), 3);
        assert_eq!(vm.rows[0].display_name, "Ana López");
        assert_eq!(vm.rows[1].status_class, "badge badge-pending");
        assert!(vm.rows[0].selected);
        assert_eq!(vm.grade_input, "90");
        assert!(!vm.dirty);
        assert!(vm.has_rubric);
    }

    #[test]
    fn anonymous_rows_hide_names() {
        let (mut session, assignments) = session();
        session.toggle_anonymous();
        let vm = map_speed_grader(&session, &assignments);
        assert_eq!(vm.rows[2].display_name, "Student #3");
        assert_eq!(vm.selected.unwrap().display_name, "Student #1");
    }

    #[test]
    fn grade_input_parsing() {
        assert_eq!(parse_grade_input(""), None);
        assert_eq!(parse_grade_input(" 88.5 "), Some(88.5));
        assert_eq!(parse_grade_input("7,5"), Some(7.5));
        assert_eq!(parse_grade_input("abc"), None);
    }

    #[test]
    fn rubric_labels() {
        let (session, _) = session();
        let vm = map_rubric(session.rubric().unwrap());
        assert_eq!(vm.total_label, "Total: 15 pts.");
        assert_eq!(vm.criteria[0].points_label, "10 pts.");
        assert_eq!(vm.criteria[1].ratings[2], "Básico (1 pts)");
    }
}
