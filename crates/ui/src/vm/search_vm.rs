use review_core::{Course, LectureId, search_lectures};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResultVm {
    pub lecture: LectureId,
    pub label: String,
}

/// Results for the search box. `None` hides the result list.
#[must_use]
pub fn map_search_results(course: &Course, query: &str) -> Option<Vec<SearchResultVm>> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(
        search_lectures(&course.lectures, query)
            .into_iter()
            .map(|hit| SearchResultVm {
                lecture: hit.lecture,
                label: format!("Lecture {}: {}", hit.number, hit.title),
            })
            .collect(),
    )
}
