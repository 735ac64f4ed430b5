mod course;
mod ids;
mod progress;
mod question;

pub use course::{Block, Course, CourseError, Lecture};
pub use ids::{EditorId, LectureId, ParseIdError, QuestionId};
pub use progress::{PROGRESS_KEY, ProgressSnapshot};
pub use question::{OptionKey, Question, QuestionDraft, QuestionError, QuestionKind, QuizOption};

/// A submitted quiz answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Letter of the chosen multiple-choice option.
    Choice(OptionKey),
    /// Raw short-answer text, untrimmed.
    Text(String),
}
