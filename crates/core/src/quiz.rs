//! Per-question lock and answer tracking for one page session.
//!
//! A question is locked exactly when an answer has been recorded for it; both
//! live in one map so the two can never disagree. Locks are never released.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::escape::escape_html;
use crate::model::{Answer, OptionKey, Question, QuestionId, QuestionKind};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Submission rejected before any state change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no option selected")]
    NoOptionSelected,

    #[error("answer is empty")]
    EmptyAnswer,

    #[error("question {question} has no option '{key}'")]
    UnknownOption { question: QuestionId, key: OptionKey },

    #[error("question {0} does not accept this kind of answer")]
    KindMismatch(QuestionId),
}

impl QuizError {
    /// Prompt shown to the reader, for errors the reader can fix.
    #[must_use]
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            QuizError::NoOptionSelected => Some("Please select an answer before submitting."),
            QuizError::EmptyAnswer => Some("Please provide an answer before submitting."),
            QuizError::UnknownOption { .. } | QuizError::KindMismatch(_) => None,
        }
    }
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Choice {
        correct: bool,
        /// Label of the correct option, e.g. `B) vector`.
        correct_label: String,
        explanation: String,
    },
    ShortAnswer {
        submitted: String,
        model_answer: String,
    },
}

impl Feedback {
    /// Banner text for the top of the feedback region.
    #[must_use]
    pub fn banner(&self) -> &'static str {
        match self {
            Feedback::Choice { correct: true, .. } => "✓ Correct!",
            Feedback::Choice { correct: false, .. } => "✗ Incorrect",
            Feedback::ShortAnswer { .. } => "Your Answer:",
        }
    }

    /// CSS modifier for the feedback region.
    #[must_use]
    pub fn tone(&self) -> &'static str {
        match self {
            Feedback::Choice { correct: false, .. } => "incorrect",
            _ => "correct",
        }
    }

    /// Feedback region markup. Every piece of reader or author text is escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Feedback::Choice {
                correct: true,
                explanation,
                ..
            } => format!(
                r#"<p class="correct-answer">{}</p><p class="explanation">{}</p>"#,
                self.banner(),
                escape_html(explanation)
            ),
            Feedback::Choice {
                correct: false,
                correct_label,
                explanation,
            } => format!(
                r#"<p class="incorrect-banner">{}</p><p class="correct-answer">Correct Answer: {}</p><p class="explanation">{}</p>"#,
                self.banner(),
                escape_html(correct_label),
                escape_html(explanation)
            ),
            Feedback::ShortAnswer {
                submitted,
                model_answer,
            } => format!(
                r#"<p class="your-answer-label">{}</p><div class="your-answer">{}</div><p class="model-answer"><strong>Model Answer:</strong></p><p>{}</p>"#,
                self.banner(),
                escape_html(submitted),
                escape_html(model_answer)
            ),
        }
    }
}

/// Result of a submit action that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Feedback),
    /// The question was already locked; nothing changed.
    AlreadyLocked,
}

//
// ─── OPTION VIEW ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

impl OptionMark {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            OptionMark::Neutral => "",
            OptionMark::Selected => "selected",
            OptionMark::Correct => "correct",
            OptionMark::Incorrect => "incorrect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub key: OptionKey,
    pub label: String,
    pub mark: OptionMark,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    answers: BTreeMap<QuestionId, Answer>,
    selections: HashMap<QuestionId, OptionKey>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_locked(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    #[must_use]
    pub fn answer(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    /// Locked question ids in ascending order.
    #[must_use]
    pub fn completed(&self) -> Vec<QuestionId> {
        self.answers.keys().copied().collect()
    }

    #[must_use]
    pub fn selection(&self, id: QuestionId) -> Option<OptionKey> {
        self.selections.get(&id).copied()
    }

    /// Select an option, replacing any sibling selection. Presentation only:
    /// the lock state is not consulted or changed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::KindMismatch` for short-answer questions and
    /// `QuizError::UnknownOption` if the key is not one of the options.
    pub fn select(&mut self, question: &Question, key: OptionKey) -> Result<(), QuizError> {
        ensure_option(question, key)?;
        self.selections.insert(question.id(), key);
        Ok(())
    }

    /// Submit a multiple-choice answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoOptionSelected` when `chosen` is `None`,
    /// `QuizError::UnknownOption` or `QuizError::KindMismatch` for answers the
    /// question cannot take. State is unchanged on error.
    pub fn submit_choice(
        &mut self,
        question: &Question,
        chosen: Option<OptionKey>,
    ) -> Result<Submission, QuizError> {
        if self.is_locked(question.id()) {
            return Ok(Submission::AlreadyLocked);
        }
        if !question.is_multiple_choice() {
            return Err(QuizError::KindMismatch(question.id()));
        }
        let chosen = chosen.ok_or(QuizError::NoOptionSelected)?;
        ensure_option(question, chosen)?;

        self.answers.insert(question.id(), Answer::Choice(chosen));
        self.selections.insert(question.id(), chosen);
        self.feedback(question)
            .map(Submission::Accepted)
            .ok_or(QuizError::KindMismatch(question.id()))
    }

    /// Submit the option currently selected for the question.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::submit_choice`].
    pub fn submit_selected(&mut self, question: &Question) -> Result<Submission, QuizError> {
        let chosen = self.selection(question.id());
        self.submit_choice(question, chosen)
    }

    /// Submit a short answer. The raw text is recorded as typed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyAnswer` for blank text and
    /// `QuizError::KindMismatch` for multiple-choice questions.
    pub fn submit_short_answer(
        &mut self,
        question: &Question,
        text: &str,
    ) -> Result<Submission, QuizError> {
        if self.is_locked(question.id()) {
            return Ok(Submission::AlreadyLocked);
        }
        if question.is_multiple_choice() {
            return Err(QuizError::KindMismatch(question.id()));
        }
        if text.trim().is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        self.answers
            .insert(question.id(), Answer::Text(text.to_string()));
        self.feedback(question)
            .map(Submission::Accepted)
            .ok_or(QuizError::KindMismatch(question.id()))
    }

    /// Feedback for a locked question, `None` while unanswered.
    #[must_use]
    pub fn feedback(&self, question: &Question) -> Option<Feedback> {
        let answer = self.answers.get(&question.id())?;
        match (question.kind(), answer) {
            (
                QuestionKind::MultipleChoice {
                    correct,
                    explanation,
                    ..
                },
                Answer::Choice(chosen),
            ) => Some(Feedback::Choice {
                correct: chosen == correct,
                correct_label: question
                    .option(*correct)
                    .map(|option| option.label())
                    .unwrap_or_default(),
                explanation: explanation.clone(),
            }),
            (QuestionKind::ShortAnswer { model_answer }, Answer::Text(text)) => {
                Some(Feedback::ShortAnswer {
                    submitted: text.clone(),
                    model_answer: model_answer.clone(),
                })
            }
            _ => None,
        }
    }

    /// Render state of each option.
    ///
    /// Once locked, every option is disabled, the correct one is marked
    /// `Correct`, and a wrong choice is marked `Incorrect`.
    #[must_use]
    pub fn options_view(&self, question: &Question) -> Vec<OptionView> {
        let QuestionKind::MultipleChoice { options, correct, .. } = question.kind() else {
            return Vec::new();
        };
        let locked_choice = match self.answers.get(&question.id()) {
            Some(Answer::Choice(key)) => Some(*key),
            _ => None,
        };
        let selected = self.selection(question.id());

        options
            .iter()
            .map(|option| {
                let mark = match locked_choice {
                    Some(_) if option.key == *correct => OptionMark::Correct,
                    Some(chosen) if option.key == chosen => OptionMark::Incorrect,
                    Some(_) => OptionMark::Neutral,
                    None if selected == Some(option.key) => OptionMark::Selected,
                    None => OptionMark::Neutral,
                };
                OptionView {
                    key: option.key,
                    label: option.label(),
                    mark,
                    checked: selected == Some(option.key),
                    disabled: locked_choice.is_some(),
                }
            })
            .collect()
    }

    /// Tally of multiple-choice results over `questions`.
    pub fn score<'a>(&self, questions: impl IntoIterator<Item = &'a Question>) -> QuizScore {
        let mut score = QuizScore::default();
        for question in questions {
            if !question.is_multiple_choice() {
                continue;
            }
            score.total += 1;
            if let Some(Feedback::Choice { correct, .. }) = self.feedback(question) {
                score.answered += 1;
                if correct {
                    score.correct += 1;
                }
            }
        }
        score
    }
}

fn ensure_option(question: &Question, key: OptionKey) -> Result<(), QuizError> {
    if !question.is_multiple_choice() {
        return Err(QuizError::KindMismatch(question.id()));
    }
    if question.option(key).is_none() {
        return Err(QuizError::UnknownOption {
            question: question.id(),
            key,
        });
    }
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
