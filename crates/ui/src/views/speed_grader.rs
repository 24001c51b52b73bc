use dioxus::prelude::*;

use course_core::model::AssignmentId;
use services::{GradingError, GradingSession};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{RubricVm, SpeedGraderVm, map_rubric, map_speed_grader, parse_grade_input};

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Saved,
    Failed(ViewError),
}

#[derive(Clone, Debug, PartialEq)]
struct GraderData {
    vm: SpeedGraderVm,
    rubric: Option<RubricVm>,
    quick_comments: Vec<String>,
}

fn snapshot(session: &GradingSession) -> Result<GraderData, ViewError> {
    let assignments = session.available_assignments()?;
    Ok(GraderData {
        vm: map_speed_grader(session, &assignments),
        rubric: session.rubric().map(map_rubric),
        quick_comments: session.quick_comments()?,
    })
}

/// Apply a session action and record the outcome as the banner notice.
fn apply(
    mut session: Signal<Result<GradingSession, ViewError>>,
    mut notice: Signal<Option<Notice>>,
    action: impl FnOnce(&mut GradingSession) -> Result<(), GradingError>,
) {
    let outcome = match session.write().as_mut() {
        Ok(session) => action(session),
        Err(_) => return,
    };
    notice.set(outcome.err().map(|err| Notice::Failed(err.into())));
}

#[component]
pub fn SpeedGraderView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(move || ctx.open_grading_session().map_err(ViewError::from));
    let mut notice = use_signal(|| None::<Notice>);
    let mut show_rubric = use_signal(|| false);

    let data = match &*session.read() {
        Ok(session) => snapshot(session),
        Err(err) => Err(err.clone()),
    };
    let data = match data {
        Ok(data) => data,
        Err(err) => {
            return rsx! {
                div { class: "page",
                    p { class: "error", "{err.message()}" }
                }
            };
        }
    };
    let GraderData {
        vm,
        rubric,
        quick_comments,
    } = data;
    let has_rubric = rubric.is_some();
    let rubric_modal = if show_rubric() { rubric } else { None };

    rsx! {
        div { class: "page speed-grader",
            div { class: "toolbar",
                select {
                    class: "assignment-select",
                    onchange: move |evt: FormEvent| {
                        if let Ok(raw) = evt.value().parse::<u64>() {
                            apply(session, notice, |s| s.switch_assignment(AssignmentId::new(raw)));
                        }
                    },
                    for choice in vm.assignments {
                        option {
                            key: "{choice.id}",
                            value: "{choice.id.value()}",
                            selected: choice.selected,
                            "{choice.title}"
                        }
                    }
                }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: vm.anonymous,
                        onchange: move |_| apply(session, notice, |s| {
                            s.toggle_anonymous();
                            Ok(())
                        }),
                    }
                    " Anonymous grading"
                }
                if has_rubric {
                    button { class: "secondary", onclick: move |_| show_rubric.set(true), "View rubric" }
                }
            }

            match notice() {
                Some(Notice::Saved) => rsx! { p { class: "notice ok", "Grade saved." } },
                Some(Notice::Failed(err)) => rsx! { p { class: "notice error", "{err.message()}" } },
                None => rsx! {},
            }

            div { class: "grader",
                aside { class: "submissions",
                    if vm.rows.is_empty() {
                        p { class: "muted", "No submissions for this assignment yet." }
                    } else {
                        ul {
                            for row in vm.rows {
                                li { key: "{row.student_id}",
                                    button {
                                        class: if row.selected { "submission selected" } else { "submission" },
                                        onclick: move |_| apply(session, notice, |s| s.select_submission(row.student_id)),
                                        span { "{row.display_name}" }
                                        span { class: row.status_class, "{row.status_label}" }
                                    }
                                }
                            }
                        }
                    }
                }

                match vm.selected {
                    None => rsx! {
                        section { class: "preview empty",
                            p { "Select a submission to start grading." }
                        }
                    },
                    Some(selected) => rsx! {
                        section { class: "preview",
                            h3 { "{selected.display_name}" }
                            img { src: "{selected.file_url}", alt: "Submitted file" }
                        }
                        section { class: "editor",
                            label { "Grade (0-100)" }
                            input {
                                r#type: "number",
                                min: "0",
                                max: "100",
                                value: "{vm.grade_input}",
                                oninput: move |evt: FormEvent| {
                                    let grade = parse_grade_input(&evt.value());
                                    apply(session, notice, |s| {
                                        s.set_draft_grade(grade);
                                        Ok(())
                                    });
                                },
                            }
                            label { "Feedback" }
                            textarea {
                                rows: "6",
                                value: "{vm.feedback}",
                                oninput: move |evt: FormEvent| {
                                    let text = evt.value();
                                    apply(session, notice, |s| {
                                        s.set_feedback(text);
                                        Ok(())
                                    });
                                },
                            }
                            div { class: "quick-comments",
                                for comment in quick_comments {
                                    QuickComment {
                                        text: comment,
                                        on_pick: move |text: String| apply(session, notice, |s| {
                                            s.append_quick_comment(&text);
                                            Ok(())
                                        }),
                                    }
                                }
                            }
                            div { class: "actions",
                                button {
                                    class: "secondary",
                                    disabled: !vm.dirty,
                                    onclick: move |_| apply(session, notice, |s| {
                                        s.discard_draft();
                                        Ok(())
                                    }),
                                    "Discard"
                                }
                                button {
                                    class: "primary",
                                    onclick: move |_| {
                                        apply(session, notice, GradingSession::commit_draft);
                                        if notice().is_none() {
                                            notice.set(Some(Notice::Saved));
                                        }
                                    },
                                    "Save grade"
                                }
                            }
                            p { class: "muted", "Status: {selected.status_label}" }
                        }
                    },
                }
            }

            {rubric_modal.map(|rubric| rsx! {
                RubricModal { rubric, on_close: move |_| show_rubric.set(false) }
            })}
        }
    }
}

#[component]
fn QuickComment(text: String, on_pick: EventHandler<String>) -> Element {
    let picked = text.clone();
    rsx! {
        button {
            class: "chip",
            onclick: move |_| on_pick.call(picked.clone()),
            "{text}"
        }
    }
}

#[component]
fn RubricModal(rubric: RubricVm, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "card modal",
                div { class: "modal-header",
                    h2 { "Grading rubric" }
                    button { class: "close", onclick: move |_| on_close.call(()), "×" }
                }
                for criterion in rubric.criteria {
                    div { class: "criterion",
                        div { class: "criterion-head",
                            span { "{criterion.description}" }
                            span { "{criterion.points_label}" }
                        }
                        div { class: "ratings",
                            for rating in criterion.ratings {
                                span { "{rating}" }
                            }
                        }
                    }
                }
                p { class: "rubric-total", "{rubric.total_label}" }
            }
        }
    }
}
