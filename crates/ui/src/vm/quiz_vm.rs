use review_core::{OptionKey, Question, QuestionId, QuizScore, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub key: OptionKey,
    pub input_id: String,
    pub label: String,
    pub class: String,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFeedbackVm {
    pub class: String,
    pub html: String,
}

/// Everything a quiz card needs to render one question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub id: QuestionId,
    pub element_id: String,
    pub feedback_id: String,
    pub heading: String,
    pub prompt: String,
    pub multiple_choice: bool,
    pub options: Vec<QuizOptionVm>,
    pub locked: bool,
    pub feedback: Option<QuizFeedbackVm>,
}

#[must_use]
pub fn question_element_id(id: QuestionId) -> String {
    format!("question-{id}")
}

#[must_use]
pub fn feedback_element_id(id: QuestionId) -> String {
    format!("feedback-{id}")
}

#[must_use]
pub fn map_quiz_card(question: &Question, session: &QuizSession) -> QuizCardVm {
    let id = question.id();
    let options = session
        .options_view(question)
        .into_iter()
        .map(|view| {
            let mark = view.mark.class();
            QuizOptionVm {
                key: view.key,
                input_id: format!("q{id}-{}", view.key),
                label: view.label,
                class: if mark.is_empty() {
                    "option".to_string()
                } else {
                    format!("option {mark}")
                },
                checked: view.checked,
                disabled: view.disabled,
            }
        })
        .collect();
    let feedback = session.feedback(question).map(|feedback| QuizFeedbackVm {
        class: format!("feedback show {}", feedback.tone()),
        html: feedback.to_html(),
    });

    QuizCardVm {
        id,
        element_id: question_element_id(id),
        feedback_id: feedback_element_id(id),
        heading: question.heading(),
        prompt: question.prompt().to_string(),
        multiple_choice: question.is_multiple_choice(),
        options,
        locked: session.is_locked(id),
        feedback,
    }
}

/// Header label such as `Quiz: 2/3 correct (1 unanswered)`.
#[must_use]
pub fn score_label(score: &QuizScore) -> Option<String> {
    if score.total == 0 {
        return None;
    }
    let unanswered = score.total - score.answered;
    let mut label = format!("Quiz: {}/{} correct", score.correct, score.total);
    if unanswered > 0 {
        label.push_str(&format!(" ({unanswered} unanswered)"));
    }
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_core::QuestionDraft;

    fn choice_question() -> Question {
        QuestionDraft::MultipleChoice {
            id: QuestionId::new(4),
            prompt: "Which is LIFO?".into(),
            options: vec!["Queue".into(), "Stack".into(), "Heap <min>".into()],
            correct: OptionKey::new('b'),
            explanation: "Stacks pop the newest element.".into(),
        }
        .build()
        .unwrap()
    }

    #[test]
    fn unanswered_card_is_open() {
        let question = choice_question();
        let vm = map_quiz_card(&question, &QuizSession::new());
        assert_eq!(vm.heading, "Question 4: Multiple Choice");
        assert_eq!(vm.element_id, "question-4");
        assert!(!vm.locked);
        assert!(vm.feedback.is_none());
        assert!(vm.options.iter().all(|o| o.class == "option" && !o.disabled));
        assert_eq!(vm.options[2].input_id, "q4-c");
    }

    #[test]
    fn wrong_answer_marks_both_options() {
        let question = choice_question();
        let mut session = QuizSession::new();
        session
            .submit_choice(&question, Some(OptionKey::new('a')))
            .unwrap();

        let vm = map_quiz_card(&question, &session);
        assert!(vm.locked);
        assert_eq!(vm.options[0].class, "option incorrect");
        assert_eq!(vm.options[1].class, "option correct");
        assert!(vm.options.iter().all(|o| o.disabled));
        let feedback = vm.feedback.unwrap();
        assert_eq!(feedback.class, "feedback show incorrect");
        assert!(feedback.html.contains("Correct Answer: B) Stack"));
    }

    #[test]
    fn score_label_counts_unanswered() {
        let score = QuizScore {
            correct: 1,
            answered: 2,
            total: 3,
        };
        assert_eq!(
            score_label(&score).as_deref(),
            Some("Quiz: 1/3 correct (1 unanswered)")
        );
        assert_eq!(score_label(&QuizScore::default()), None);
    }
}
