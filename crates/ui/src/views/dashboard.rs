use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::Navigator;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{DashboardVm, StudentChipVm, map_dashboard};

const RECENT_ACTIVITY: usize = 5;

fn load(ctx: &AppContext) -> Result<DashboardVm, ViewError> {
    let overview = ctx.overview();
    let summary = overview.summary()?;
    let activity = ctx.recent_activity(RECENT_ACTIVITY)?;
    Ok(map_dashboard(&summary, &activity, overview.today()))
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(load(&ctx));

    rsx! {
        div { class: "page dashboard",
            match state {
                ViewState::Ready(vm) => rsx! {
                    div { class: "stats",
                        div { class: "card stat",
                            h3 { "Enrolled students" }
                            p { class: "stat-value", "{vm.student_count}" }
                        }
                        div { class: "card stat",
                            h3 { "Average progress" }
                            p { class: "stat-value", "{vm.average_progress_label}" }
                        }
                        div { class: "card stat",
                            h3 { "Active today" }
                            p { class: "stat-value", "{vm.active_today}" }
                        }
                        div { class: "card stat",
                            h3 { "Pending submissions" }
                            p { class: "stat-value", "{vm.pending_count}" }
                            for line in vm.pending_lines {
                                p { class: "muted", "{line}" }
                            }
                        }
                        div { class: "card stat",
                            h3 { "Modules" }
                            p { class: "stat-value", "{vm.module_count}" }
                            p { class: "muted", "{vm.announcement_count} announcements posted" }
                        }
                    }
                    div { class: "grid",
                        StudentList {
                            title: "Students at risk",
                            empty: "No students at risk.",
                            students: vm.at_risk,
                        }
                        StudentList {
                            title: "Inactive for over a week",
                            empty: "Everyone connected this week.",
                            students: vm.inactive,
                        }
                        div { class: "card",
                            h3 { "Recent activity" }
                            ul { class: "activity",
                                for entry in vm.activity {
                                    li {
                                        span { class: "activity-when", "{entry.when}" }
                                        strong { " {entry.user}: " }
                                        span { "{entry.action}" }
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn StudentList(title: &'static str, empty: &'static str, students: Vec<StudentChipVm>) -> Element {
    let mut nav = use_context::<Signal<Navigator>>();

    rsx! {
        div { class: "card",
            h3 { "{title}" }
            if students.is_empty() {
                p { class: "muted", "{empty}" }
            } else {
                ul {
                    for student in students {
                        li { key: "{student.id}",
                            button {
                                class: "link",
                                onclick: move |_| nav.write().select_student(student.id),
                                "{student.name}"
                            }
                            span { class: "muted", " {student.detail}" }
                        }
                    }
                }
            }
        }
    }
}
