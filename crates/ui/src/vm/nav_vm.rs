use dioxus::prelude::keyboard_types::{Key, Modifiers};
use review_core::{Course, LectureId, NavDirection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabVm {
    pub id: LectureId,
    pub label: String,
    pub title: String,
    pub class: &'static str,
    pub active: bool,
}

#[must_use]
pub fn lecture_element_id(id: LectureId) -> String {
    format!("lecture-{id}")
}

#[must_use]
pub fn map_tabs(course: &Course, active: LectureId) -> Vec<TabVm> {
    course
        .lectures
        .iter()
        .enumerate()
        .map(|(index, lecture)| {
            let is_active = lecture.id == active;
            TabVm {
                id: lecture.id,
                label: format!("Lecture {}", index + 1),
                title: lecture.title.clone(),
                class: if is_active { "nav-tab active" } else { "nav-tab" },
                active: is_active,
            }
        })
        .collect()
}

/// Alt+Left and Alt+Right move between lectures.
#[must_use]
pub fn nav_direction_for_key(key: &Key, modifiers: Modifiers) -> Option<NavDirection> {
    if !modifiers.contains(Modifiers::ALT) {
        return None;
    }
    match key {
        Key::ArrowLeft => Some(NavDirection::Previous),
        Key::ArrowRight => Some(NavDirection::Next),
        _ => None,
    }
}

/// Ctrl+Enter or Cmd+Enter runs the focused editor.
#[must_use]
pub fn is_run_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    *key == Key::Enter
        && (modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META))
}
