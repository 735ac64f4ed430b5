use std::sync::Arc;

use dioxus::prelude::*;
use review_core::{OptionKey, QuestionId, QuizError, Submission};
use services::ProgressService;

use crate::context::AppContext;
use crate::vm::{feedback_element_id, map_quiz_card};

use super::scripts::{scroll_into_view, show_alert};
use super::state::ReviewState;

#[component]
pub fn QuizCard(id: QuestionId) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<ReviewState>();
    let mut quiz = state.quiz;
    let mut short_answers = state.short_answers;

    let course = ctx.course();
    let question = course.question(id).cloned();

    let on_select = use_callback({
        let question = question.clone();
        move |key: OptionKey| {
            let Some(question) = question.as_ref() else {
                return;
            };
            if let Err(err) = quiz.write().select(question, key) {
                tracing::warn!(question = %id, error = %err, "option selection rejected");
            }
        }
    });

    let on_submit = use_callback({
        let question = question.clone();
        let progress = ctx.progress();
        move |()| {
            let Some(question) = question.as_ref() else {
                return;
            };
            let result = if question.is_multiple_choice() {
                quiz.write().submit_selected(question)
            } else {
                let text = short_answers
                    .peek()
                    .get(&id)
                    .cloned()
                    .unwrap_or_default();
                quiz.write().submit_short_answer(question, &text)
            };
            handle_submission(id, result, Arc::clone(&progress));
        }
    });

    let Some(question) = question else {
        return rsx! {};
    };
    let vm = map_quiz_card(&question, &quiz.read());
    let draft = short_answers.read().get(&id).cloned().unwrap_or_default();
    let (feedback_class, feedback_html) = vm
        .feedback
        .map_or_else(|| ("feedback".to_string(), String::new()), |f| (f.class, f.html));

    rsx! {
        div { class: "quiz-question", id: "{vm.element_id}", "data-question": "{id}",
            h4 { class: "quiz-heading", "{vm.heading}" }
            p { class: "quiz-prompt", "{vm.prompt}" }
            if vm.multiple_choice {
                div { class: "options",
                    for option in vm.options {
                        label {
                            key: "{option.input_id}",
                            class: "{option.class}",
                            r#for: "{option.input_id}",
                            input {
                                r#type: "radio",
                                id: "{option.input_id}",
                                name: "question-{id}",
                                value: "{option.key}",
                                checked: option.checked,
                                disabled: option.disabled,
                                onchange: move |_| on_select.call(option.key),
                            }
                            span { "{option.label}" }
                        }
                    }
                }
            } else {
                textarea {
                    class: "short-answer",
                    rows: "4",
                    placeholder: "Type your answer here...",
                    value: "{draft}",
                    disabled: vm.locked,
                    oninput: move |evt| {
                        short_answers.write().insert(id, evt.value());
                    },
                }
            }
            button {
                class: "submit-btn",
                r#type: "button",
                disabled: vm.locked,
                onclick: move |_| on_submit.call(()),
                "Submit Answer"
            }
            div {
                id: "{vm.feedback_id}",
                class: "{feedback_class}",
                dangerous_inner_html: "{feedback_html}",
            }
        }
    }
}

fn handle_submission(
    id: QuestionId,
    result: Result<Submission, QuizError>,
    progress: Arc<ProgressService>,
) {
    match result {
        Ok(Submission::Accepted(feedback)) => {
            tracing::info!(question = %id, banner = feedback.banner(), "quiz answer locked");
            let feedback_id = feedback_element_id(id);
            spawn(async move {
                scroll_into_view(&feedback_id).await;
                if let Err(err) = progress.record_quiz_completed(id).await {
                    tracing::warn!(question = %id, error = %err, "could not record quiz progress");
                }
            });
        }
        Ok(Submission::AlreadyLocked) => {
            tracing::debug!(question = %id, "question already answered");
        }
        Err(err) => match err.prompt() {
            Some(prompt) => {
                spawn(async move {
                    show_alert(prompt).await;
                });
            }
            None => tracing::warn!(question = %id, error = %err, "quiz submission rejected"),
        },
    }
}
