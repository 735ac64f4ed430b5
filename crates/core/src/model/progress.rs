use serde::{Deserialize, Serialize};

use crate::model::ids::{EditorId, LectureId, QuestionId};

/// Storage key the snapshot is saved under.
pub const PROGRESS_KEY: &str = "dss_progress";

/// What a reader has done so far: lectures opened, quizzes answered and
/// editors run. Serialized as
/// `{"lecturesViewed": [], "quizzesCompleted": [], "codeRun": []}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressSnapshot {
    lectures_viewed: Vec<LectureId>,
    quizzes_completed: Vec<QuestionId>,
    code_run: Vec<EditorId>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lecture view. The most recent view is kept last.
    ///
    /// Returns `true` if the lecture had not been viewed before.
    pub fn mark_lecture_viewed(&mut self, id: LectureId) -> bool {
        let existed = if let Some(pos) = self.lectures_viewed.iter().position(|l| *l == id) {
            self.lectures_viewed.remove(pos);
            true
        } else {
            false
        };
        self.lectures_viewed.push(id);
        !existed
    }

    /// Returns `true` if the quiz was newly recorded.
    pub fn mark_quiz_completed(&mut self, id: QuestionId) -> bool {
        push_unique(&mut self.quizzes_completed, id)
    }

    /// Returns `true` if the editor was newly recorded.
    pub fn mark_code_run(&mut self, id: EditorId) -> bool {
        push_unique(&mut self.code_run, id)
    }

    #[must_use]
    pub fn lectures_viewed(&self) -> &[LectureId] {
        &self.lectures_viewed
    }

    #[must_use]
    pub fn quizzes_completed(&self) -> &[QuestionId] {
        &self.quizzes_completed
    }

    #[must_use]
    pub fn code_run(&self) -> &[EditorId] {
        &self.code_run
    }

    #[must_use]
    pub fn last_viewed(&self) -> Option<LectureId> {
        self.lectures_viewed.last().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lectures_viewed.is_empty() && self.quizzes_completed.is_empty() && self.code_run.is_empty()
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        return false;
    }
    items.push(item);
    true
}
