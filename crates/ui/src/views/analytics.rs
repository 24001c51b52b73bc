use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::Navigator;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{AnalyticsVm, map_analytics};

fn load(ctx: &AppContext) -> Result<AnalyticsVm, ViewError> {
    let board = ctx.board()?;
    let students = ctx.students()?;
    Ok(map_analytics(&board, &students, ctx.overview().today()))
}

#[component]
pub fn AnalyticsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<Navigator>>();
    let state = view_state_from_result(load(&ctx));

    rsx! {
        div { class: "page analytics",
            match state {
                ViewState::Ready(vm) => rsx! {
                    div { class: "card",
                        h3 { "Lesson completion" }
                        table { class: "completion",
                            thead {
                                tr {
                                    th { "Lesson" }
                                    th { "Module" }
                                    th { "Completed" }
                                }
                            }
                            tbody {
                                for lesson in vm.lessons {
                                    tr { key: "{lesson.id}",
                                        td {
                                            "{lesson.title}"
                                            if lesson.is_locked {
                                                span { class: "muted", " (locked)" }
                                            }
                                        }
                                        td { "{lesson.module}" }
                                        td {
                                            div { class: "progress",
                                                div { class: "progress-bar", style: "width: {lesson.percent}%" }
                                            }
                                            span { "{lesson.percent}% ({lesson.completed})" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "grid",
                        div { class: "card",
                            h3 { "Problem lessons" }
                            if vm.problem_lessons.is_empty() {
                                p { class: "muted", "Every open lesson is on track." }
                            }
                            ul {
                                for lesson in vm.problem_lessons {
                                    li { key: "{lesson.id}", "{lesson.title} ({lesson.percent}% completed)" }
                                }
                            }
                        }
                        div { class: "card",
                            h3 { "Least active students" }
                            if vm.inactive.is_empty() {
                                p { class: "muted", "Everyone connected this week." }
                            }
                            ul {
                                for student in vm.inactive {
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
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}
