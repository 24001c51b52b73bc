use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::Navigator;
use crate::views::Shell;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(Navigator::new(ctx.initial_view())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Window title stays fixed; screen titles live in the header.
        document::Title { "LMS Platform" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}
