use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{CalendarVm, WEEKDAYS, map_calendar};

fn load(ctx: &AppContext) -> Result<CalendarVm, ViewError> {
    let items = ctx.gradebook().items()?;
    let board = ctx.board()?;
    Ok(map_calendar(ctx.overview().today(), &items, &board))
}

#[component]
pub fn CalendarView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(load(&ctx));

    rsx! {
        div { class: "page calendar",
            match state {
                ViewState::Ready(vm) => rsx! {
                    div { class: "card",
                        h2 { "{vm.title}" }
                        table { class: "month",
                            thead {
                                tr {
                                    for name in WEEKDAYS {
                                        th { "{name}" }
                                    }
                                }
                            }
                            tbody {
                                for week in vm.weeks {
                                    tr {
                                        for cell in week {
                                            td { class: if cell.is_today { "day today" } else { "day" },
                                                {cell.day.map(|day| rsx! { span { class: "day-number", "{day}" } })}
                                                for event in cell.events {
                                                    div { class: "event", "{event}" }
                                                }
                                            }
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
