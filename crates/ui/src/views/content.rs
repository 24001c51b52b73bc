use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::{Navigator, SubForm};
use crate::views::{ViewState, view_state_from_result};

const CONTENT_TYPES: [&str; 5] = ["Video", "Article", "Assignment", "Project", "Quiz"];

#[component]
pub fn ContentView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<Navigator>>();
    let modules = ctx.board().map(|board| board.modules);

    rsx! {
        div { class: "page content",
            div { class: "toolbar",
                button {
                    class: "primary",
                    onclick: move |_| nav.write().open_sub_form(SubForm::ContentForm),
                    "Add content"
                }
            }
            match view_state_from_result(modules) {
                ViewState::Ready(modules) => rsx! {
                    if modules.is_empty() {
                        p { class: "muted", "No modules yet." }
                    }
                    for module in modules {
                        div { key: "{module.id}", class: "card",
                            h3 { "{module.title}" }
                            ul { class: "lessons",
                                for lesson in module.lessons {
                                    li { key: "{lesson.id}",
                                        class: if lesson.is_locked { "lesson locked" } else { "lesson" },
                                        span { class: "badge", "{lesson.kind.label()}" }
                                        " {lesson.title}"
                                        if lesson.is_locked {
                                            span { class: "muted", " (locked)" }
                                        }
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

/// Create/edit form for a lesson. Nothing is persisted.
#[component]
pub fn ContentFormView() -> Element {
    let mut nav = use_context::<Signal<Navigator>>();
    let mut content_type = use_signal(String::new);
    let kind = content_type();

    rsx! {
        div { class: "page content-form",
            button { class: "back", onclick: move |_| nav.write().back(), "← Back to Content Management" }
            div { class: "card",
                h2 { "Create / Edit Content" }
                label { r#for: "content-title", "Title" }
                input { id: "content-title", r#type: "text" }
                label { r#for: "content-type", "Type" }
                select {
                    id: "content-type",
                    value: "{kind}",
                    onchange: move |evt: FormEvent| content_type.set(evt.value()),
                    option { value: "", "Select a type" }
                    for ty in CONTENT_TYPES {
                        option { value: ty, "{ty}" }
                    }
                }
                match kind.as_str() {
                    "Video" => rsx! {
                        label { r#for: "video-url", "YouTube URL" }
                        input { id: "video-url", r#type: "url", placeholder: "https://www.youtube.com/watch?v=..." }
                    },
                    "Article" => rsx! {
                        label { r#for: "article-content", "Content" }
                        textarea { id: "article-content", rows: "10" }
                    },
                    "Assignment" | "Project" => rsx! {
                        fieldset {
                            legend { "{kind}" }
                            label { r#for: "assignment-instructions", "Instructions" }
                            textarea { id: "assignment-instructions", rows: "5" }
                            label { r#for: "assignment-points", "Points" }
                            input { id: "assignment-points", r#type: "number", value: "100" }
                            label { r#for: "assignment-due-date", "Due date" }
                            input { id: "assignment-due-date", r#type: "date" }
                        }
                    },
                    _ => rsx! {},
                }
                div { class: "actions",
                    button { class: "secondary", onclick: move |_| nav.write().back(), "Cancel" }
                    button { class: "primary", onclick: move |_| nav.write().back(), "Save" }
                }
            }
        }
    }
}
