//! Read-only course board screens.

use dioxus::prelude::*;

use course_core::model::RECYCLE_RETENTION_DAYS;

use crate::context::AppContext;
use crate::routes::Navigator;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{
    GroupVm, InboxVm, map_announcements, map_forum, map_gallery, map_groups, map_inbox,
    map_questions, map_recycle_bin,
};

#[component]
fn ErrorLine(err: ViewError) -> Element {
    rsx! { p { class: "error", "{err.message()}" } }
}

#[component]
pub fn AnnouncementsView() -> Element {
    let ctx = use_context::<AppContext>();
    let today = ctx.overview().today();
    let state = view_state_from_result(ctx.board().map(|b| map_announcements(&b, today)));

    rsx! {
        div { class: "page announcements",
            match state {
                ViewState::Ready(list) => rsx! {
                    div { class: "card",
                        if list.is_empty() {
                            p { class: "muted", "No announcements yet." }
                        }
                        for ann in list {
                            article {
                                key: "{ann.id}",
                                class: if ann.is_scheduled { "announcement scheduled" } else { "announcement" },
                                h3 { "{ann.title}" }
                                p { class: "muted", "{ann.when}" }
                                p { "{ann.content}" }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! { ErrorLine { err } },
            }
        }
    }
}

#[component]
pub fn InboxView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut open = use_signal(|| None::<u64>);
    let state = view_state_from_result(ctx.board().map(|b| map_inbox(&b)));
    let opened = match (&state, open()) {
        (ViewState::Ready(inbox), Some(id)) => inbox.messages.iter().find(|m| m.id == id).cloned(),
        _ => None,
    };

    rsx! {
        div { class: "page inbox",
            match state {
                ViewState::Ready(InboxVm { unread, messages }) => rsx! {
                    div { class: "card",
                        p { class: "muted", "{unread} unread" }
                        ul { class: "messages",
                            for m in messages {
                                li {
                                    key: "{m.id}",
                                    class: if m.unread { "message unread" } else { "message" },
                                    onclick: move |_| open.set(Some(m.id)),
                                    span { class: "message-from", "{m.from}" }
                                    span { class: "muted", " {m.sent_at}" }
                                    p { "{m.subject}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! { ErrorLine { err } },
            }
            {opened.map(|m| rsx! {
                div { class: "card message-body",
                    h3 { "{m.subject}" }
                    p { class: "muted", "From {m.from}, {m.sent_at}" }
                    p { "{m.body}" }
                    button { class: "secondary", onclick: move |_| open.set(None), "Close" }
                }
            })}
        }
    }
}

#[component]
pub fn QuestionBankView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(ctx.board().map(|b| map_questions(&b)));

    rsx! {
        div { class: "page question-bank",
            match state {
                ViewState::Ready(questions) => rsx! {
                    div { class: "card",
                        ul {
                            for q in questions {
                                li { key: "{q.id}",
                                    p { strong { "{q.text}" } }
                                    if !q.options.is_empty() {
                                        ol { class: "options",
                                            for option in q.options {
                                                li { "{option}" }
                                            }
                                        }
                                    }
                                    p { class: "muted", "{q.detail}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! { ErrorLine { err } },
            }
        }
    }
}

fn load_groups(ctx: &AppContext) -> Result<Vec<GroupVm>, ViewError> {
    let board = ctx.board()?;
    let students = ctx.students()?;
    Ok(map_groups(&board, &students))
}

#[component]
pub fn GroupsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<Navigator>>();
    let state = view_state_from_result(load_groups(&ctx));

    rsx! {
        div { class: "page groups",
            match state {
                ViewState::Ready(groups) => rsx! {
                    div { class: "grid",
                        for group in groups {
                            div { key: "{group.id}", class: "card",
                                h3 { "{group.name}" }
                                ul {
                                    for member in group.members {
                                        li { key: "{member.id}",
                                            button {
                                                class: "link",
                                                onclick: move |_| nav.write().select_student(member.id),
                                                "{member.name}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! { ErrorLine { err } },
            }
        }
    }
}

#[component]
pub fn RecycleBinView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(ctx.board().map(|b| map_recycle_bin(&b)));

    rsx! {
        div { class: "page recycle-bin",
            div { class: "card",
                p { class: "muted", "Items are deleted permanently after {RECYCLE_RETENTION_DAYS} days." }
                match state {
                    ViewState::Ready(items) => rsx! {
                        if items.is_empty() {
                            p { class: "muted", "The recycle bin is empty." }
                        }
                        ul {
                            for item in items {
                                li { key: "{item.id}",
                                    p {
                                        strong { "{item.name}" }
                                        " ({item.kind})"
                                    }
                                    p { class: "muted", "Deleted {item.deleted_on}, purged on {item.purge_on}" }
                                }
                            }
                        }
                    },
                    ViewState::Error(err) => rsx! { ErrorLine { err } },
                }
            }
        }
    }
}

#[component]
pub fn ForumView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(ctx.board().map(|b| map_forum(&b)));

    rsx! {
        div { class: "page forum",
            match state {
                ViewState::Ready(posts) => rsx! {
                    for post in posts {
                        div { key: "{post.id}", class: "card post",
                            h3 {
                                if post.is_pinned {
                                    span { class: "badge", "Pinned" }
                                }
                                if post.is_locked {
                                    span { class: "badge", "Locked" }
                                }
                                " {post.title}"
                            }
                            p { class: "muted", "by {post.author}" }
                            p { "{post.content}" }
                            p { class: "muted", "{post.replies}" }
                        }
                    }
                },
                ViewState::Error(err) => rsx! { ErrorLine { err } },
            }
        }
    }
}

#[component]
pub fn GalleryView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(ctx.board().map(|b| map_gallery(&b)));

    rsx! {
        div { class: "page gallery",
            match state {
                ViewState::Ready(projects) => rsx! {
                    div { class: "grid",
                        for project in projects {
                            figure { key: "{project.id}", class: "card",
                                img { src: "{project.image_url}", alt: "{project.title}" }
                                figcaption {
                                    strong { "{project.title}" }
                                    p { class: "muted", "{project.student_name}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! { ErrorLine { err } },
            }
        }
    }
}
