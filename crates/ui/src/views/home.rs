use dioxus::prelude::*;
use review_core::LectureId;

use crate::context::AppContext;

use super::review::ReviewPage;
use super::state::{ViewError, ViewState, view_state_from_resource};

/// Entry page: reopens the lecture viewed last, or the first one.
#[component]
pub fn ReviewHome() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();
    let first = course.lectures.first().map(|lecture| lecture.id);

    let resource = use_resource({
        let progress = ctx.progress();
        let course = course.clone();
        move || {
            let progress = progress.clone();
            let course = course.clone();
            async move {
                let snapshot = progress.load().await.map_err(|err| {
                    tracing::warn!(error = %err, "could not load progress");
                    ViewError::Unknown
                })?;
                Ok::<_, ViewError>(
                    snapshot
                        .last_viewed()
                        .filter(|id| course.lecture(*id).is_some()),
                )
            }
        }
    });

    let start: Option<LectureId> = match view_state_from_resource(resource) {
        ViewState::Idle | ViewState::Loading => {
            return rsx! {
                div { class: "page loading", p { "Loading…" } }
            };
        }
        ViewState::Ready(last) => last.or(first),
        ViewState::Error(_) => first,
    };

    let Some(lecture) = start else {
        let message = ViewError::message();
        return rsx! {
            div { class: "fatal",
                h1 { "Nothing to review" }
                p { "{message}" }
            }
        };
    };
    rsx! { ReviewPage { lecture } }
}
