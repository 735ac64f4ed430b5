use dioxus::prelude::*;
use dioxus_router::Routable;
use review_core::LectureId;

use crate::views::{ReviewHome, ReviewPage};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", ReviewHome)] Home {},
    #[route("/lecture/:id", LectureView)] Lecture { id: u32 },
}

#[component]
fn LectureView(id: u32) -> Element {
    rsx! { ReviewPage { lecture: LectureId::new(id) } }
}
