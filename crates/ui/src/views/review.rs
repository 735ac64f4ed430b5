use dioxus::prelude::*;
use dioxus_router::use_navigator;
use review_core::{LectureId, Navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{map_tabs, nav_direction_for_key, score_label};

use super::lecture::LecturePanel;
use super::scripts::{print_page, scroll_to_top};
use super::search::SearchBox;
use super::state::ReviewState;

/// The whole review page with `lecture` as the active tab.
#[component]
pub fn ReviewPage(lecture: LectureId) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<ReviewState>();
    let router = use_navigator();
    let course = ctx.course();

    let activate = use_callback({
        let progress = ctx.progress();
        move |id: LectureId| {
            tracing::debug!(lecture = %id, "activating lecture");
            router.push(Route::Lecture { id: id.value() });
            let progress = progress.clone();
            spawn(async move {
                scroll_to_top().await;
                if let Err(err) = progress.record_lecture_viewed(id).await {
                    tracing::warn!(lecture = %id, error = %err, "could not record lecture view");
                }
            });
        }
    });

    let mut nav = match Navigator::new(course.lecture_ids()) {
        Ok(nav) => nav,
        Err(err) => {
            return rsx! {
                div { class: "fatal",
                    h1 { "Nothing to review" }
                    p { "{err}" }
                }
            };
        }
    };
    if let Err(err) = nav.activate(lecture) {
        tracing::warn!(error = %err, "unknown lecture requested; showing the first one");
    }
    let active = nav.active();
    let tabs = map_tabs(&course, active);
    let score = score_label(&state.quiz.read().score(course.questions()));

    let on_key = move |evt: KeyboardEvent| {
        let Some(direction) = nav_direction_for_key(&evt.data.key(), evt.data.modifiers()) else {
            return;
        };
        evt.prevent_default();
        if let Some(next) = nav.step(direction) {
            activate.call(next);
        }
    };

    rsx! {
        div {
            class: "page review-page",
            id: "review-root",
            tabindex: "0",
            onkeydown: on_key,
            // Keyboard navigation works before the reader clicks anything.
            onmounted: move |evt: MountedEvent| async move {
                if let Err(err) = evt.data().set_focus(true).await {
                    tracing::debug!(error = ?err, "could not focus review page");
                }
            },
            header { class: "review-header",
                h1 { "{course.title}" }
                div { class: "header-tools",
                    if let Some(score) = score {
                        span { class: "quiz-score", "{score}" }
                    }
                    SearchBox { on_pick: move |id| activate.call(id) }
                    button {
                        class: "print-btn",
                        r#type: "button",
                        onclick: move |_| {
                            spawn(print_page());
                        },
                        "Print"
                    }
                }
            }
            nav { class: "nav-tabs",
                for tab in tabs {
                    button {
                        key: "{tab.id}",
                        class: "{tab.class}",
                        r#type: "button",
                        "data-lecture": "{tab.id}",
                        title: "{tab.title}",
                        onclick: move |_| activate.call(tab.id),
                        span { class: "nav-tab-number", "{tab.label}" }
                        span { class: "nav-tab-title", "{tab.title}" }
                    }
                }
            }
            main { class: "content",
                LecturePanel { key: "{active}", id: active }
            }
            footer { class: "shortcuts",
                "Ctrl/Cmd + Enter: run code · Alt + ←/→: switch lectures"
            }
        }
    }
}
