use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {0} has an empty prompt")]
    EmptyPrompt(QuestionId),

    #[error("question {id} needs at least two options, found {count}")]
    TooFewOptions { id: QuestionId, count: usize },

    #[error("question {id} has {count} options, more than can be lettered")]
    TooManyOptions { id: QuestionId, count: usize },

    #[error("question {id} marks '{key}' as correct but has no such option")]
    MissingCorrectOption { id: QuestionId, key: OptionKey },
}

//
// ─── OPTION KEYS ───────────────────────────────────────────────────────────────
//

/// Letter identifying a multiple-choice option (`a`, `b`, `c`, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionKey(char);

impl OptionKey {
    pub const MAX_OPTIONS: usize = 26;

    /// Key for the option at `index` in document order.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        let offset = u8::try_from(index).ok().filter(|i| usize::from(*i) < Self::MAX_OPTIONS)?;
        Some(Self(char::from(b'a' + offset)))
    }

    #[must_use]
    pub fn new(key: char) -> Self {
        Self(key.to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_char(&self) -> char {
        self.0
    }

    /// Upper-case letter shown in front of the option text.
    #[must_use]
    pub fn label(&self) -> char {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Debug for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionKey({})", self.0)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub key: OptionKey,
    pub text: String,
}

impl QuizOption {
    /// Text as displayed next to the radio button, e.g. `B) Linked list`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}) {}", self.key.label(), self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<QuizOption>,
        correct: OptionKey,
        explanation: String,
    },
    ShortAnswer {
        model_answer: String,
    },
}

/// A validated quiz question. Built from a [`QuestionDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft", into = "QuestionDraft")]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    /// Options in document order; empty for short-answer questions.
    #[must_use]
    pub fn options(&self) -> &[QuizOption] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::ShortAnswer { .. } => &[],
        }
    }

    #[must_use]
    pub fn option(&self, key: OptionKey) -> Option<&QuizOption> {
        self.options().iter().find(|option| option.key == key)
    }

    /// Heading shown above the prompt, e.g. `Question 3: Multiple Choice`.
    #[must_use]
    pub fn heading(&self) -> String {
        let kind = match self.kind {
            QuestionKind::MultipleChoice { .. } => "Multiple Choice",
            QuestionKind::ShortAnswer { .. } => "Short Answer",
        };
        format!("Question {}: {kind}", self.id)
    }
}

/// Authoring form of a question: options are plain strings and get their
/// letters assigned in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionDraft {
    MultipleChoice {
        id: QuestionId,
        prompt: String,
        options: Vec<String>,
        correct: OptionKey,
        #[serde(default)]
        explanation: String,
    },
    ShortAnswer {
        id: QuestionId,
        prompt: String,
        model_answer: String,
    },
}

impl QuestionDraft {
    /// Validate the draft and assign option letters.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is empty, a multiple-choice
    /// question has fewer than two or more than 26 options, or the correct
    /// key does not name one of the options.
    pub fn build(self) -> Result<Question, QuestionError> {
        match self {
            QuestionDraft::MultipleChoice {
                id,
                prompt,
                options,
                correct,
                explanation,
            } => {
                ensure_prompt(id, &prompt)?;
                let count = options.len();
                if count < 2 {
                    return Err(QuestionError::TooFewOptions { id, count });
                }
                if count > OptionKey::MAX_OPTIONS {
                    return Err(QuestionError::TooManyOptions { id, count });
                }
                let options = options
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, text)| {
                        OptionKey::from_index(index).map(|key| QuizOption { key, text })
                    })
                    .collect::<Vec<_>>();
                let correct = OptionKey::new(correct.as_char());
                if !options.iter().any(|option| option.key == correct) {
                    return Err(QuestionError::MissingCorrectOption { id, key: correct });
                }
                Ok(Question {
                    id,
                    prompt,
                    kind: QuestionKind::MultipleChoice {
                        options,
                        correct,
                        explanation,
                    },
                })
            }
            QuestionDraft::ShortAnswer {
                id,
                prompt,
                model_answer,
            } => {
                ensure_prompt(id, &prompt)?;
                Ok(Question {
                    id,
                    prompt,
                    kind: QuestionKind::ShortAnswer { model_answer },
                })
            }
        }
    }
}

fn ensure_prompt(id: QuestionId, prompt: &str) -> Result<(), QuestionError> {
    if prompt.trim().is_empty() {
        return Err(QuestionError::EmptyPrompt(id));
    }
    Ok(())
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        draft.build()
    }
}

impl From<Question> for QuestionDraft {
    fn from(question: Question) -> Self {
        match question.kind {
            QuestionKind::MultipleChoice {
                options,
                correct,
                explanation,
            } => QuestionDraft::MultipleChoice {
                id: question.id,
                prompt: question.prompt,
                options: options.into_iter().map(|option| option.text).collect(),
                correct,
                explanation,
            },
            QuestionKind::ShortAnswer { model_answer } => QuestionDraft::ShortAnswer {
                id: question.id,
                prompt: question.prompt,
                model_answer,
            },
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_draft(options: &[&str], correct: char) -> QuestionDraft {
        QuestionDraft::MultipleChoice {
            id: QuestionId::new(1),
            prompt: "Which container gives O(1) random access?".into(),
            options: options.iter().map(|s| (*s).to_string()).collect(),
            correct: OptionKey::new(correct),
            explanation: "Vectors store elements contiguously.".into(),
        }
    }

    #[test]
    fn build_assigns_letters_in_order() {
        let question = choice_draft(&["list", "vector", "map"], 'b').build().unwrap();
        let keys: Vec<char> = question.options().iter().map(|o| o.key.as_char()).collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
        assert_eq!(question.options()[1].label(), "B) vector");
        assert_eq!(question.heading(), "Question 1: Multiple Choice");
    }

    #[test]
    fn correct_key_is_case_insensitive() {
        let question = choice_draft(&["x", "y"], 'B').build().unwrap();
        match question.kind() {
            QuestionKind::MultipleChoice { correct, .. } => assert_eq!(correct.as_char(), 'b'),
            QuestionKind::ShortAnswer { .. } => panic!("expected multiple choice"),
        }
    }

    #[test]
    fn rejects_missing_correct_option() {
        let err = choice_draft(&["x", "y"], 'd').build().unwrap_err();
        assert!(matches!(err, QuestionError::MissingCorrectOption { .. }));
    }

    #[test]
    fn rejects_single_option() {
        let err = choice_draft(&["only"], 'a').build().unwrap_err();
        assert_eq!(
            err,
            QuestionError::TooFewOptions {
                id: QuestionId::new(1),
                count: 1
            }
        );
    }

    #[test]
    fn rejects_blank_prompt() {
        let draft = QuestionDraft::ShortAnswer {
            id: QuestionId::new(4),
            prompt: "   ".into(),
            model_answer: "Encapsulation".into(),
        };
        assert_eq!(draft.build().unwrap_err(), QuestionError::EmptyPrompt(QuestionId::new(4)));
    }

    #[test]
    fn option_key_from_index_is_bounded() {
        assert_eq!(OptionKey::from_index(0), Some(OptionKey::new('a')));
        assert_eq!(OptionKey::from_index(25), Some(OptionKey::new('z')));
        assert_eq!(OptionKey::from_index(26), None);
    }

    #[test]
    fn deserializes_from_authoring_json() {
        let json = r#"{
            "type": "multiple-choice",
            "id": 2,
            "prompt": "What does RAII stand for?",
            "options": ["Resource Acquisition Is Initialization", "Random Access"],
            "correct": "a",
            "explanation": "Lifetimes own resources."
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id(), QuestionId::new(2));
        assert!(question.is_multiple_choice());

        let bad = r#"{"type":"multiple-choice","id":3,"prompt":"?","options":["a","b"],"correct":"c"}"#;
        assert!(serde_json::from_str::<Question>(bad).is_err());
    }
}
