use pulldown_cmark::{Event, Options, Parser, TagEnd};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{EditorId, LectureId, QuestionId};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course has no lectures")]
    NoLectures,

    #[error("lecture {0} has an empty title")]
    EmptyLectureTitle(LectureId),

    #[error("lecture id {0} is used more than once")]
    DuplicateLecture(LectureId),

    #[error("question id {0} is used more than once")]
    DuplicateQuestion(QuestionId),

    #[error("editor id {0} is used more than once")]
    DuplicateEditor(EditorId),
}

//
// ─── CONTENT ───────────────────────────────────────────────────────────────────
//

/// One piece of lecture content, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    /// Read-only code listing; gets a copy button.
    Code {
        #[serde(default = "default_language")]
        language: String,
        source: String,
    },
    /// Editable code area paired with an output region.
    Editor {
        id: EditorId,
        #[serde(default)]
        starter: String,
    },
    Question(Question),
}

fn default_language() -> String {
    "cpp".to_string()
}

impl Block {
    /// Text a reader sees for this block. Hidden feedback (explanations and
    /// model answers) is not part of it.
    fn visible_text(&self) -> String {
        match self {
            Block::Heading { text } => text.clone(),
            Block::Paragraph { text } => prose_text(text),
            Block::Code { source, .. } => source.clone(),
            Block::Editor { starter, .. } => starter.clone(),
            Block::Question(question) => {
                let mut text = format!("{}\n{}", question.heading(), question.prompt());
                for option in question.options() {
                    text.push('\n');
                    text.push_str(&option.label());
                }
                text
            }
        }
    }
}

/// Words a reader sees once Markdown prose is rendered: markup characters and
/// raw HTML are dropped, inline code keeps its text.
fn prose_text(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut text = String::with_capacity(markdown.len());
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak | Event::End(TagEnd::Paragraph | TagEnd::Item) => text.push('\n'),
            _ => {}
        }
    }
    text.trim_end().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: LectureId,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Lecture {
    /// Title followed by the visible text of every block, newline separated.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut text = self.title.clone();
        for block in &self.blocks {
            text.push('\n');
            text.push_str(&block.visible_text());
        }
        text
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Question(question) => Some(question),
            _ => None,
        })
    }

    pub fn editors(&self) -> impl Iterator<Item = EditorId> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Editor { id, .. } => Some(*id),
            _ => None,
        })
    }
}

/// The full set of lecture panels a page is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub lectures: Vec<Lecture>,
}

impl Course {
    /// Check identifiers are unique and titles are present.
    ///
    /// # Errors
    ///
    /// Returns the first `CourseError` found.
    pub fn validate(&self) -> Result<(), CourseError> {
        if self.title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if self.lectures.is_empty() {
            return Err(CourseError::NoLectures);
        }

        let mut lectures = HashSet::new();
        let mut questions = HashSet::new();
        let mut editors = HashSet::new();
        for lecture in &self.lectures {
            if lecture.title.trim().is_empty() {
                return Err(CourseError::EmptyLectureTitle(lecture.id));
            }
            if !lectures.insert(lecture.id) {
                return Err(CourseError::DuplicateLecture(lecture.id));
            }
            for question in lecture.questions() {
                if !questions.insert(question.id()) {
                    return Err(CourseError::DuplicateQuestion(question.id()));
                }
            }
            for editor in lecture.editors() {
                if !editors.insert(editor) {
                    return Err(CourseError::DuplicateEditor(editor));
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn lecture_ids(&self) -> Vec<LectureId> {
        self.lectures.iter().map(|lecture| lecture.id).collect()
    }

    #[must_use]
    pub fn lecture(&self, id: LectureId) -> Option<&Lecture> {
        self.lectures.iter().find(|lecture| lecture.id == id)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.lectures.iter().flat_map(Lecture::questions)
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions().find(|question| question.id() == id)
    }

    pub fn editors(&self) -> impl Iterator<Item = EditorId> + '_ {
        self.lectures.iter().flat_map(Lecture::editors)
    }

    /// Starter text for an editor, if the editor exists.
    #[must_use]
    pub fn editor_starter(&self, id: EditorId) -> Option<&str> {
        self.lectures
            .iter()
            .flat_map(|lecture| lecture.blocks.iter())
            .find_map(|block| match block {
                Block::Editor { id: editor, starter } if *editor == id => Some(starter.as_str()),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{OptionKey, QuestionDraft};

    fn question(id: u32) -> Question {
        QuestionDraft::MultipleChoice {
            id: QuestionId::new(id),
            prompt: "Pick one".into(),
            options: vec!["first".into(), "second".into()],
            correct: OptionKey::new('a'),
            explanation: "Because.".into(),
        }
        .build()
        .unwrap()
    }

    fn lecture(id: u32, blocks: Vec<Block>) -> Lecture {
        Lecture {
            id: LectureId::new(id),
            title: format!("Lecture {id}"),
            blocks,
        }
    }

    fn course(lectures: Vec<Lecture>) -> Course {
        Course {
            title: "Data Structures Review".into(),
            lectures,
        }
    }

    #[test]
    fn valid_course_passes() {
        let course = course(vec![
            lecture(1, vec![Block::Question(question(1))]),
            lecture(
                2,
                vec![
                    Block::Question(question(2)),
                    Block::Editor {
                        id: EditorId::new(1),
                        starter: "int main() {}".into(),
                    },
                ],
            ),
        ]);
        assert_eq!(course.validate(), Ok(()));
        assert_eq!(course.questions().count(), 2);
        assert_eq!(course.editor_starter(EditorId::new(1)), Some("int main() {}"));
        assert!(course.question(QuestionId::new(2)).is_some());
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let course = course(vec![
            lecture(1, vec![Block::Question(question(5))]),
            lecture(2, vec![Block::Question(question(5))]),
        ]);
        assert_eq!(
            course.validate(),
            Err(CourseError::DuplicateQuestion(QuestionId::new(5)))
        );
    }

    #[test]
    fn duplicate_lectures_are_rejected() {
        let course = course(vec![lecture(1, vec![]), lecture(1, vec![])]);
        assert_eq!(
            course.validate(),
            Err(CourseError::DuplicateLecture(LectureId::new(1)))
        );
    }

    #[test]
    fn empty_course_is_rejected() {
        assert_eq!(course(vec![]).validate(), Err(CourseError::NoLectures));
    }

    #[test]
    fn plain_text_skips_hidden_feedback() {
        let lecture = lecture(
            1,
            vec![
                Block::Paragraph {
                    text: "Stacks are LIFO.".into(),
                },
                Block::Question(question(1)),
            ],
        );
        let text = lecture.plain_text();
        assert!(text.contains("Stacks are LIFO."));
        assert!(text.contains("B) second"));
        assert!(!text.contains("Because."));
    }

    #[test]
    fn blocks_deserialize_from_tagged_json() {
        let json = r#"{
            "title": "Review",
            "lectures": [{
                "id": 1,
                "title": "Pointers",
                "blocks": [
                    {"kind": "paragraph", "text": "A pointer stores an address."},
                    {"kind": "code", "source": "int *p = &x;"},
                    {"kind": "editor", "id": 1},
                    {"kind": "question", "type": "short-answer", "id": 1,
                     "prompt": "What is a dangling pointer?", "model_answer": "A pointer to freed memory."}
                ]
            }]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.validate(), Ok(()));
        let blocks = &course.lectures[0].blocks;
        assert!(matches!(&blocks[1], Block::Code { language, .. } if language == "cpp"));
        assert!(matches!(&blocks[2], Block::Editor { starter, .. } if starter.is_empty()));
        assert!(matches!(&blocks[3], Block::Question(q) if !q.is_multiple_choice()));
    }
}
