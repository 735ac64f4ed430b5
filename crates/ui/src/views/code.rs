use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use review_core::{CONFIRMATION_DELAY, EditorId, OutputPanel};
use services::{ProgressService, RunCoordinator};

use crate::context::AppContext;
use crate::vm::{highlight_code, is_run_shortcut, map_output};

use super::scripts::write_clipboard;
use super::state::ReviewState;

const COPY_ACK: Duration = Duration::from_secs(2);

/// Read-only listing with a copy button.
#[component]
pub fn CodeBlock(language: String, source: String) -> Element {
    let mut copied = use_signal(|| false);
    let html = highlight_code(&language, &source);

    let on_copy = move |_| {
        let source = source.clone();
        spawn(async move {
            if write_clipboard(&source).await {
                copied.set(true);
                tokio::time::sleep(COPY_ACK).await;
                copied.set(false);
            }
        });
    };

    rsx! {
        div { class: "code-block",
            button {
                class: if copied() { "copy-btn copied" } else { "copy-btn" },
                r#type: "button",
                onclick: on_copy,
                if copied() { "✓ Copied!" } else { "Copy" }
            }
            pre {
                code { class: "language-{language}", dangerous_inner_html: "{html}" }
            }
        }
    }
}

/// Editable source area paired with its output region.
#[component]
pub fn CodeRunner(editor: EditorId) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<ReviewState>();
    let mut drafts = state.drafts;
    let outputs = state.outputs;

    let starter = ctx
        .course()
        .editor_starter(editor)
        .unwrap_or_default()
        .to_string();

    let run = use_callback({
        let coordinator = ctx.run_coordinator();
        let progress = ctx.progress();
        let starter = starter.clone();
        move |()| {
            let code = drafts
                .peek()
                .get(&editor)
                .cloned()
                .unwrap_or_else(|| starter.clone());
            start_run(
                editor,
                code,
                Arc::clone(&coordinator),
                Arc::clone(&progress),
                outputs,
            );
        }
    });

    let code = drafts.read().get(&editor).cloned().unwrap_or(starter);
    let output = map_output(editor, outputs.read().get(&editor));

    rsx! {
        div { class: "code-editor",
            div { class: "editor-header",
                span { class: "editor-title", "Try it yourself" }
                button {
                    class: "run-btn",
                    r#type: "button",
                    onclick: move |_| run.call(()),
                    "▶ Run Code"
                }
            }
            textarea {
                id: "{editor.editor_element_id()}",
                class: "code-input",
                spellcheck: "false",
                rows: "12",
                value: "{code}",
                oninput: move |evt| {
                    drafts.write().insert(editor, evt.value());
                },
                onkeydown: move |evt| {
                    if is_run_shortcut(&evt.data.key(), evt.data.modifiers()) {
                        evt.prevent_default();
                        evt.stop_propagation();
                        run.call(());
                    }
                },
            }
            div { class: "terminal-output", id: "{output.element_id}",
                for (index, line) in output.lines.into_iter().enumerate() {
                    div { key: "{index}", class: "{line.class}", "{line.text}" }
                }
            }
        }
    }
}

/// Send `code` for `editor` and update its output region when the reply
/// arrives. Replies to superseded runs are dropped.
///
/// The task outlives the component so switching tabs mid-run still records
/// the result.
fn start_run(
    editor: EditorId,
    code: String,
    coordinator: Arc<RunCoordinator>,
    progress: Arc<ProgressService>,
    mut outputs: Signal<HashMap<EditorId, OutputPanel>>,
) {
    let ticket = coordinator.begin(editor);
    if !code.trim().is_empty() {
        outputs.write().insert(editor, OutputPanel::compiling());
    }

    spawn_forever(async move {
        let report = coordinator.execute(ticket, &code).await;
        if !coordinator.is_current(&report.ticket) {
            tracing::debug!(editor = %editor, seq = ticket.seq(), "dropping stale run result");
            return;
        }
        outputs.write().insert(editor, report.outcome.to_panel());

        if report.outcome.was_sent() {
            if let Err(err) = progress.record_code_run(editor).await {
                tracing::warn!(editor = %editor, error = %err, "could not record code run");
            }
        }

        if report.outcome.succeeded() {
            tokio::time::sleep(CONFIRMATION_DELAY).await;
            if coordinator.is_current(&report.ticket) {
                if let Some(panel) = outputs.write().get_mut(&editor) {
                    panel.confirm();
                }
            }
        }
    });
}
