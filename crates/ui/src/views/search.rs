use dioxus::prelude::*;
use review_core::LectureId;

use crate::context::AppContext;
use crate::vm::map_search_results;

#[component]
pub fn SearchBox(on_pick: EventHandler<LectureId>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(String::new);
    let results = map_search_results(&ctx.course(), &query.read());

    rsx! {
        div { class: "search",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search lectures...",
                aria_label: "Search lectures",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            if let Some(results) = results {
                ul { class: "search-results",
                    if results.is_empty() {
                        li { class: "search-empty", "No lectures match." }
                    }
                    for result in results {
                        li { key: "{result.lecture}",
                            button {
                                class: "search-hit",
                                r#type: "button",
                                onclick: move |_| {
                                    query.set(String::new());
                                    on_pick.call(result.lecture);
                                },
                                "{result.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
