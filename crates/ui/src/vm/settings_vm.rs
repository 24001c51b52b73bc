use course_core::model::{AuditEntry, CourseBoard, GradebookItem, GradebookItemId, StaffRole};

use crate::vm::ActivityVm;
use crate::vm::time_fmt::{format_date, format_datetime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Course,
    Users,
    Dates,
    AuditLog,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Course,
        SettingsTab::Users,
        SettingsTab::Dates,
        SettingsTab::AuditLog,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Course => "Course",
            SettingsTab::Users => "Users",
            SettingsTab::Dates => "Due dates",
            SettingsTab::AuditLog => "Audit log",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffRowVm {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DueDateVm {
    pub id: GradebookItemId,
    pub title: String,
    pub due: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsVm {
    pub course_title: String,
    pub staff: Vec<StaffRowVm>,
    pub due_dates: Vec<DueDateVm>,
    pub audit: Vec<ActivityVm>,
}

/// `audit` is expected newest first, as the audit log returns it.
#[must_use]
pub fn map_settings(board: &CourseBoard, items: &[GradebookItem], audit: &[AuditEntry]) -> SettingsVm {
    let mut due_dates: Vec<_> = items
        .iter()
        .map(|item| (item.due_date(), item))
        .collect();
    due_dates.sort_by_key(|(due, _)| *due);

    SettingsVm {
        course_title: board.title.clone(),
        staff: board
            .staff
            .iter()
            .map(|m| StaffRowVm {
                id: m.id,
                name: m.name.clone(),
                email: m.email.clone(),
                role: m.role,
            })
            .collect(),
        due_dates: due_dates
            .into_iter()
            .map(|(due, item)| DueDateVm {
                id: item.id(),
                title: item.title().to_owned(),
                due: format_date(due),
            })
            .collect(),
        audit: audit
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
    fn seeded_settings_cover_every_tab() {
        let services = AppServices::seeded(fixed_clock(), "Prof").unwrap();
        let vm = map_settings(
            &services.board().unwrap(),
            &services.gradebook().items().unwrap(),
            &services.audit_log().unwrap(),
        );

        assert_eq!(vm.course_title, "Diseño Asistido por Computadora (CAD)");
        assert_eq!(vm.staff[1].role, StaffRole::Assistant);

        let dates: Vec<_> = vm.due_dates.iter().map(|d| d.due.as_str()).collect();
        assert_eq!(dates, ["2024-07-20", "2024-08-01", "2024-08-05", "2024-08-20"]);

        assert_eq!(vm.audit.len(), 3);
        assert_eq!(vm.audit[0].when, "2024-07-23 11:45");
        assert_eq!(vm.audit[2].user, "Profesor Titular");
    }
}
