use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::use_review_state_provider;
use crate::vm::highlight_css;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_review_state_provider();
    let title = ctx.course().title.clone();
    let highlight = highlight_css();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }
        style { "{highlight}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
