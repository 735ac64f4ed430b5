use crate::model::{Lecture, LectureId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub lecture: LectureId,
    /// 1-based position of the lecture in document order.
    pub number: usize,
    pub title: String,
}

/// Lectures whose visible text contains `query`, ignoring case, in document
/// order. No ranking; an empty query matches every lecture.
#[must_use]
pub fn search_lectures(lectures: &[Lecture], query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    lectures
        .iter()
        .enumerate()
        .filter(|(_, lecture)| lecture.plain_text().to_lowercase().contains(&needle))
        .map(|(index, lecture)| SearchHit {
            lecture: lecture.id,
            number: index + 1,
            title: lecture.title.clone(),
        })
        .collect()
}
