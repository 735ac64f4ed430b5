use thiserror::Error;

use crate::model::LectureId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavError {
    #[error("there are no lectures to navigate")]
    NoLectures,

    #[error("no tab for lecture {0}")]
    UnknownLecture(LectureId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Tab strip over the lecture panels. Exactly one tab is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    tabs: Vec<LectureId>,
    active: usize,
}

impl Navigator {
    /// Build a navigator with the first tab active.
    ///
    /// # Errors
    ///
    /// Returns `NavError::NoLectures` if `tabs` is empty.
    pub fn new(tabs: Vec<LectureId>) -> Result<Self, NavError> {
        if tabs.is_empty() {
            return Err(NavError::NoLectures);
        }
        Ok(Self { tabs, active: 0 })
    }

    #[must_use]
    pub fn tabs(&self) -> &[LectureId] {
        &self.tabs
    }

    #[must_use]
    pub fn active(&self) -> LectureId {
        self.tabs[self.active]
    }

    #[must_use]
    pub fn is_active(&self, id: LectureId) -> bool {
        self.active() == id
    }

    /// Make `id` the active tab and panel.
    ///
    /// # Errors
    ///
    /// Returns `NavError::UnknownLecture` and leaves the active tab unchanged
    /// if `id` has no tab.
    pub fn activate(&mut self, id: LectureId) -> Result<LectureId, NavError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| *tab == id)
            .ok_or(NavError::UnknownLecture(id))?;
        self.active = index;
        Ok(id)
    }

    /// Move to the neighbouring tab in document order.
    ///
    /// Clamped at both ends: returns `None` and changes nothing when there is
    /// no tab in that direction.
    pub fn step(&mut self, direction: NavDirection) -> Option<LectureId> {
        let next = match direction {
            NavDirection::Previous => self.active.checked_sub(1)?,
            NavDirection::Next => {
                let next = self.active + 1;
                if next >= self.tabs.len() {
                    return None;
                }
                next
            }
        };
        self.active = next;
        Some(self.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> Navigator {
        Navigator::new((1..=3).map(LectureId::new).collect()).unwrap()
    }

    #[test]
    fn starts_on_first_tab() {
        let nav = three_tabs();
        assert_eq!(nav.active(), LectureId::new(1));
        assert!(nav.is_active(LectureId::new(1)));
        assert!(!nav.is_active(LectureId::new(2)));
    }

    #[test]
    fn next_is_clamped_at_the_last_tab() {
        let mut nav = three_tabs();
        assert_eq!(nav.step(NavDirection::Next), Some(LectureId::new(2)));
        assert_eq!(nav.step(NavDirection::Next), Some(LectureId::new(3)));
        assert_eq!(nav.step(NavDirection::Next), None);
        assert_eq!(nav.active(), LectureId::new(3));
    }

    #[test]
    fn previous_is_clamped_at_the_first_tab() {
        let mut nav = three_tabs();
        assert_eq!(nav.step(NavDirection::Previous), None);
        assert_eq!(nav.active(), LectureId::new(1));
    }

    #[test]
    fn activate_switches_the_single_active_tab() {
        let mut nav = three_tabs();
        assert_eq!(nav.activate(LectureId::new(3)), Ok(LectureId::new(3)));
        let active: Vec<_> = nav.tabs().iter().filter(|id| nav.is_active(**id)).collect();
        assert_eq!(active, vec![&LectureId::new(3)]);
        assert_eq!(nav.step(NavDirection::Previous), Some(LectureId::new(2)));
    }

    #[test]
    fn activate_unknown_keeps_current_tab() {
        let mut nav = three_tabs();
        nav.activate(LectureId::new(2)).unwrap();
        assert_eq!(
            nav.activate(LectureId::new(9)),
            Err(NavError::UnknownLecture(LectureId::new(9)))
        );
        assert_eq!(nav.active(), LectureId::new(2));
    }

    #[test]
    fn empty_tab_list_is_rejected() {
        assert_eq!(Navigator::new(Vec::new()), Err(NavError::NoLectures));
    }
}
