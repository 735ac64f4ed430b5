#![forbid(unsafe_code)]

pub mod escape;
pub mod model;
pub mod nav;
pub mod output;
pub mod quiz;
pub mod search;

pub use escape::escape_html;
pub use model::{
    Answer, Block, Course, CourseError, EditorId, Lecture, LectureId, OptionKey, PROGRESS_KEY,
    ProgressSnapshot, Question, QuestionDraft, QuestionError, QuestionId, QuestionKind, QuizOption,
};
pub use nav::{NavDirection, NavError, Navigator};
pub use output::{
    COMPILING_MESSAGE, CONFIRMATION_DELAY, CONFIRMATION_MESSAGE, OutputLine, OutputPanel, OutputTone,
};
pub use quiz::{Feedback, OptionMark, OptionView, QuizError, QuizScore, QuizSession, Submission};
pub use search::{SearchHit, search_lectures};
