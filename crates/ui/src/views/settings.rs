use dioxus::prelude::*;

use course_core::model::StaffRole;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{SettingsTab, SettingsVm, map_settings};

fn load(ctx: &AppContext) -> Result<SettingsVm, ViewError> {
    let board = ctx.board()?;
    let items = ctx.gradebook().items()?;
    let audit = ctx.audit_log()?;
    Ok(map_settings(&board, &items, &audit))
}

/// Course settings. Every tab panel is rendered; inactive ones are hidden.
#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut tab = use_signal(SettingsTab::default);
    let active = tab();
    let state = view_state_from_result(load(&ctx));

    rsx! {
        div { class: "page settings",
            nav { class: "tabs",
                for t in SettingsTab::ALL {
                    button {
                        class: if t == active { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }
            match state {
                ViewState::Ready(vm) => rsx! {
                    section { class: "card", hidden: active != SettingsTab::Course,
                        label { r#for: "course-title", "Course title" }
                        input { id: "course-title", r#type: "text", value: "{vm.course_title}" }
                        label { r#for: "course-description", "Description" }
                        textarea { id: "course-description", rows: "4" }
                    }
                    section { class: "card", hidden: active != SettingsTab::Users,
                        h3 { "Staff roles" }
                        ul {
                            for member in vm.staff {
                                li { key: "{member.id}",
                                    strong { "{member.name}" }
                                    span { class: "muted", " {member.email} " }
                                    select {
                                        for role in StaffRole::ALL {
                                            option { selected: role == member.role, "{role.label()}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    section { class: "card", hidden: active != SettingsTab::Dates,
                        h3 { "Due dates" }
                        table {
                            thead {
                                tr {
                                    th { "Item" }
                                    th { "Due" }
                                }
                            }
                            tbody {
                                for row in vm.due_dates {
                                    tr { key: "{row.id}",
                                        td { "{row.title}" }
                                        td { input { r#type: "date", value: "{row.due}" } }
                                    }
                                }
                            }
                        }
                    }
                    section { class: "card audit-log", hidden: active != SettingsTab::AuditLog,
                        h3 { "Audit log" }
                        if vm.audit.is_empty() {
                            p { class: "muted", "No recorded changes." }
                        }
                        ul { class: "activity",
                            for entry in vm.audit {
                                li {
                                    span { class: "activity-when", "{entry.when}" }
                                    strong { " {entry.user}: " }
                                    span { "{entry.action}" }
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
