mod code;
mod home;
mod lecture;
mod quiz;
mod review;
mod scripts;
mod search;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use code::{CodeBlock, CodeRunner};
pub use home::ReviewHome;
pub use lecture::LecturePanel;
pub use quiz::QuizCard;
pub use review::ReviewPage;
pub use search::SearchBox;
pub use state::{ReviewState, ViewError, ViewState, use_review_state_provider, view_state_from_resource};
