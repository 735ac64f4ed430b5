use review_core::{EditorId, OutputPanel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLineVm {
    pub class: &'static str,
    pub text: String,
}

/// Output region for one editor, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputVm {
    pub element_id: String,
    pub lines: Vec<OutputLineVm>,
    pub placeholder: bool,
}

const PLACEHOLDER: &str = "Click \"Run Code\" to compile and execute.";

#[must_use]
pub fn map_output(editor: EditorId, panel: Option<&OutputPanel>) -> OutputVm {
    let element_id = editor.output_element_id();
    match panel.filter(|panel| !panel.is_empty()) {
        Some(panel) => OutputVm {
            element_id,
            lines: panel
                .lines()
                .iter()
                .map(|line| OutputLineVm {
                    class: line.tone.class(),
                    text: line.display_text(),
                })
                .collect(),
            placeholder: false,
        },
        None => OutputVm {
            element_id,
            lines: vec![OutputLineVm {
                class: "output-line output-line--placeholder",
                text: PLACEHOLDER.to_string(),
            }],
            placeholder: true,
        },
    }
}
