use dioxus::prelude::*;

use course_core::model::GradebookItemId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{ItemColumnVm, map_gradebook};

#[component]
pub fn GradebookView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut revision = use_signal(|| 0_u32);
    let mut notice = use_signal(|| None::<ViewError>);

    let gradebook = ctx.gradebook();
    let toggle = use_callback(move |id: GradebookItemId| {
        match gradebook.toggle_published(id) {
            Ok(_) => notice.set(None),
            Err(err) => notice.set(Some(err.into())),
        }
        *revision.write() += 1;
    });

    // Re-read the sheet after every toggle.
    let _ = revision();
    let state = view_state_from_result(ctx.gradebook().sheet().map(|sheet| map_gradebook(&sheet)));

    rsx! {
        div { class: "page gradebook",
            {notice().map(|err| rsx! {
                p { class: "notice error", "{err.message()}" }
            })}
            match state {
                ViewState::Ready(vm) => rsx! {
                    table { class: "sheet",
                        thead {
                            tr {
                                th { rowspan: "2", "Student" }
                                for header in vm.headers {
                                    th { colspan: "{header.span}", class: "category",
                                        "{header.label} ({header.weight_label})"
                                    }
                                }
                                th { rowspan: "2", "Final grade" }
                            }
                            tr {
                                for column in vm.columns {
                                    ColumnHeader { column, on_toggle: toggle }
                                }
                            }
                        }
                        tbody {
                            for row in vm.rows {
                                tr { key: "{row.student_id}",
                                    td { class: "name", "{row.name}" }
                                    for cell in row.cells {
                                        td { class: cell.class, "{cell.text}" }
                                    }
                                    td { class: "final", "{row.final_label}" }
                                }
                            }
                        }
                    }
                    p { class: "muted",
                        "Only published items count toward the final grade."
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
fn ColumnHeader(column: ItemColumnVm, on_toggle: Callback<GradebookItemId>) -> Element {
    let id = column.id;
    rsx! {
        th { class: if column.published { "item" } else { "item unpublished" },
            div { "{column.title}" }
            div { class: "muted", "{column.weight_label} · due {column.due_label}" }
            button {
                class: "eye",
                title: column.toggle_hint,
                onclick: move |_| on_toggle.call(id),
                if column.published { "👁" } else { "🚫" }
            }
        }
    }
}
