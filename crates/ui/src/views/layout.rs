use dioxus::prelude::*;

use crate::routes::{Navigator, Screen, View};
use crate::views::{
    AnalyticsView, AnnouncementsView, CalendarView, ContentFormView, ContentView, DashboardView,
    ForumView, GalleryView, GradebookView, GroupsView, InboxView, QuestionBankView,
    RecycleBinView, SettingsView, SpeedGraderView, StudentDetailView, StudentListView,
};

/// Sidebar, header and the active screen.
#[component]
pub fn Shell() -> Element {
    let nav = use_context::<Signal<Navigator>>();
    let screen = nav.read().screen();

    rsx! {
        div { class: "app",
            Sidebar {}
            div { class: "main",
                header { class: "header",
                    h1 { "{screen.title()}" }
                }
                main { class: "content",
                    ScreenView { screen }
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let mut nav = use_context::<Signal<Navigator>>();
    let active = nav.read().view();

    rsx! {
        nav { class: "sidebar",
            h2 { "LMS Platform" }
            ul {
                for view in View::SIDEBAR {
                    li { key: "{view.slug()}",
                        button {
                            class: if view == active { "nav-item active" } else { "nav-item" },
                            onclick: move |_| nav.write().navigate(view),
                            span { class: "nav-icon", "{view.icon()}" }
                            span { "{view.title()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScreenView(screen: Screen) -> Element {
    match screen {
        Screen::StudentDetail(student_id) => rsx! { StudentDetailView { student_id } },
        Screen::ContentForm => rsx! { ContentFormView {} },
        Screen::View(view) => match view {
            View::Dashboard => rsx! { DashboardView {} },
            View::SpeedGrader => rsx! { SpeedGraderView {} },
            View::Gradebook => rsx! { GradebookView {} },
            View::Students => rsx! { StudentListView {} },
            View::Content => rsx! { ContentView {} },
            View::Analytics => rsx! { AnalyticsView {} },
            View::Groups => rsx! { GroupsView {} },
            View::Gallery => rsx! { GalleryView {} },
            View::Forum => rsx! { ForumView {} },
            View::Announcements => rsx! { AnnouncementsView {} },
            View::Calendar => rsx! { CalendarView {} },
            View::Inbox => rsx! { InboxView {} },
            View::QuestionBank => rsx! { QuestionBankView {} },
            View::RecycleBin => rsx! { RecycleBinView {} },
            View::Settings => rsx! { SettingsView {} },
        },
    }
}
