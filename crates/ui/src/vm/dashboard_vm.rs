use chrono::NaiveDate;
use course_core::model::{AuditEntry, StudentId};
use services::CourseSummary;
use services::overview::days_inactive;

use crate::vm::time_fmt::{days_ago, format_datetime};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentChipVm {
    pub id: StudentId,
    pub name: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityVm {
    pub user: String,
    pub action: String,
    pub when: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub student_count: usize,
    pub average_progress_label: String,
    pub active_today: usize,
    pub pending_count: usize,
    /// One line per assignment with ungraded work.
    pub pending_lines: Vec<String>,
    pub module_count: usize,
    pub announcement_count: usize,
    pub at_risk: Vec<StudentChipVm>,
    pub inactive: Vec<StudentChipVm>,
    pub activity: Vec<ActivityVm>,
}

/// Whole percent, halves rounded away from zero.
fn progress_label(value: f64) -> String {
    format!("{:.0}%", value.round())
}

#[must_use]
pub fn map_dashboard(summary: &CourseSummary, activity: &[AuditEntry], today: NaiveDate) -> DashboardVm {
    DashboardVm {
        student_count: summary.student_count,
        average_progress_label: progress_label(summary.average_progress),
        active_today: summary.active_today,
        pending_count: summary.pending_submissions,
        pending_lines: summary
            .pending_by_assignment
            .iter()
            .map(|p| format!("{} in {}", p.count, p.assignment))
            .collect(),
        module_count: summary.module_count,
        announcement_count: summary.announcement_count,
        at_risk: summary
            .at_risk
            .iter()
            .map(|s| StudentChipVm {
                id: s.id(),
                name: s.name().to_owned(),
                detail: format!("({}% progress)", s.progress().value()),
            })
            .collect(),
        inactive: summary
            .inactive
            .iter()
            .map(|s| StudentChipVm {
                id: s.id(),
                name: s.name().to_owned(),
                detail: format!("Last seen {}", days_ago(days_inactive(s, today))),
            })
            .collect(),
        activity: activity
            .iter()
            .map(|entry| ActivityVm {
                user: entry.user.clone(),
                action: entry.action.clone(),
                when: format_datetime(entry.timestamp),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::time::fixed_clock;
    use services::AppServices;

    #[test]
    fn maps_seeded_course() {
        let clock = fixed_clock();
        let services = AppServices::seeded(clock, "Prof").unwrap();
        let summary = services.overview().summary().unwrap();
        let activity = services.recent_activity(2).unwrap();
        let vm = map_dashboard(&summary, &activity, clock.today());

        assert_eq!(vm.student_count, 5);
        assert_eq!(vm.average_progress_label, "68%");
        assert_eq!(vm.at_risk[0].detail, "(30% progress)");
        assert_eq!(vm.inactive[0].detail, "Last seen 8 days ago");
        assert_eq!(vm.activity.len(), 2);
        assert_eq!(vm.activity[0].when, "2024-07-23 11:45");
        assert_eq!(vm.active_today, 1);
        assert_eq!(vm.pending_count, 2);
        assert_eq!(
            vm.pending_lines,
            ["1 in Tarea 1 - Primeros Pasos", "1 in Proyecto de Módulo 2"]
        );
        assert_eq!(vm.module_count, 2);
        assert_eq!(vm.announcement_count, 2);
    }

    #[test]
    fn average_progress_rounds_halves_up() {
        let today = fixed_clock().today();
        let vm = |average_progress| {
            let summary = CourseSummary {
                average_progress,
                ..CourseSummary::default()
            };
            map_dashboard(&summary, &[], today).average_progress_label
        };
        assert_eq!(vm(68.5), "69%");
        assert_eq!(vm(68.4), "68%");
        assert_eq!(vm(0.5), "1%");
        assert_eq!(vm(0.0), "0%");
    }
}
