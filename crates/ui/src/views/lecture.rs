use dioxus::prelude::*;
use review_core::{Block, LectureId};

use crate::context::AppContext;
use crate::vm::{lecture_element_id, prose_to_html};

use super::code::{CodeBlock, CodeRunner};
use super::quiz::QuizCard;

/// The visible panel for one lecture.
#[component]
pub fn LecturePanel(id: LectureId) -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();
    let Some(lecture) = course.lecture(id) else {
        return rsx! {
            section { class: "lecture-content active",
                p { class: "empty", "This lecture is not available." }
            }
        };
    };
    let element_id = lecture_element_id(id);

    rsx! {
        section { class: "lecture-content active", id: "{element_id}",
            h2 { class: "lecture-title", "{lecture.title}" }
            for (index, block) in lecture.blocks.iter().enumerate() {
                div { key: "{index}", class: "lecture-block", {render_block(block)} }
            }
        }
    }
}

fn render_block(block: &Block) -> Element {
    match block {
        Block::Heading { text } => rsx! {
            h3 { "{text}" }
        },
        Block::Paragraph { text } => rsx! {
            div { class: "prose", dangerous_inner_html: prose_to_html(text) }
        },
        Block::Code { language, source } => rsx! {
            CodeBlock { language: language.clone(), source: source.clone() }
        },
        Block::Editor { id, .. } => rsx! {
            CodeRunner { editor: *id }
        },
        Block::Question(question) => rsx! {
            QuizCard { id: question.id() }
        },
    }
}
