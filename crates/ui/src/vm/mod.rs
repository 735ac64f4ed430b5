mod highlight_vm;
mod markdown_vm;
mod nav_vm;
mod output_vm;
mod quiz_vm;
mod search_vm;

pub use highlight_vm::{highlight_code, highlight_css};
pub use markdown_vm::prose_to_html;
pub use nav_vm::{TabVm, is_run_shortcut, lecture_element_id, map_tabs, nav_direction_for_key};
pub use output_vm::{OutputLineVm, OutputVm, map_output};
pub use quiz_vm::{
    QuizCardVm, QuizFeedbackVm, QuizOptionVm, feedback_element_id, map_quiz_card,
    question_element_id, score_label,
};
pub use search_vm::{SearchResultVm, map_search_results};
