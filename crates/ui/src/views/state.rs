use std::collections::HashMap;

use dioxus::prelude::*;
use review_core::{EditorId, OutputPanel, QuestionId, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message() -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Page-session state shared by every lecture panel. Lives above the router
/// so switching tabs keeps answers, editor text and output.
#[derive(Clone, Copy)]
pub struct ReviewState {
    pub quiz: Signal<QuizSession>,
    pub short_answers: Signal<HashMap<QuestionId, String>>,
    pub drafts: Signal<HashMap<EditorId, String>>,
    pub outputs: Signal<HashMap<EditorId, OutputPanel>>,
}

impl ReviewState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            quiz: Signal::new(QuizSession::new()),
            short_answers: Signal::new(HashMap::new()),
            drafts: Signal::new(HashMap::new()),
            outputs: Signal::new(HashMap::new()),
        }
    }
}

/// Provide a fresh `ReviewState` to the current component's subtree.
pub fn use_review_state_provider() -> ReviewState {
    use_context_provider(ReviewState::new)
}
