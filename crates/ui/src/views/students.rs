use dioxus::prelude::*;

use course_core::model::StudentId;

use crate::context::AppContext;
use crate::routes::Navigator;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{StudentDetailVm, map_student_detail, map_student_rows};

#[component]
pub fn StudentListView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<Navigator>>();
    let state = view_state_from_result(ctx.students().map(|s| map_student_rows(&s)));

    rsx! {
        div { class: "page students",
            match state {
                ViewState::Ready(rows) => rsx! {
                    table { class: "roster",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Progress" }
                                th { "Last connection" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr {
                                    key: "{row.id}",
                                    class: "clickable",
                                    onclick: move |_| nav.write().select_student(row.id),
                                    td { "{row.name}" }
                                    td { "{row.email}" }
                                    td {
                                        div { class: "progress",
                                            div { class: "progress-bar", style: "width: {row.progress}%" }
                                        }
                                        span { "{row.progress}%" }
                                    }
                                    td { "{row.last_connection}" }
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

fn load_detail(ctx: &AppContext, id: StudentId) -> Result<StudentDetailVm, ViewError> {
    let student = ctx.student(id)?.ok_or(ViewError::NotFound)?;
    let items = ctx.gradebook().items()?;
    Ok(map_student_detail(&student, &items))
}

#[component]
pub fn StudentDetailView(student_id: StudentId) -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<Navigator>>();
    let state = view_state_from_result(load_detail(&ctx, student_id));

    rsx! {
        div { class: "page student-detail",
            button { class: "back", onclick: move |_| nav.write().back(), "← Back" }
            match state {
                ViewState::Ready(vm) => rsx! {
                    div { class: "card",
                        h2 { "{vm.row.name}" }
                        p { class: "muted", "{vm.row.email}" }
                        dl { class: "summary",
                            dt { "Progress" }
                            dd { "{vm.row.progress}%" }
                            dt { "Last connection" }
                            dd { "{vm.row.last_connection}" }
                            dt { "Completed lessons" }
                            dd { "{vm.completed_lessons}" }
                            dt { "Final grade" }
                            dd { "{vm.final_label}" }
                        }
                    }
                    div { class: "grid",
                        div { class: "card",
                            h3 { "Grades" }
                            ul {
                                for line in vm.grades {
                                    li { "{line.title}: {line.grade}" }
                                }
                            }
                        }
                        div { class: "card",
                            h3 { "By category" }
                            ul {
                                for line in vm.categories {
                                    li { "{line.label}: {line.percent}" }
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
