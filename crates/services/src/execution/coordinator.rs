use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use review_core::EditorId;

use super::client::CodeExecutor;
use super::outcome::ExecutionOutcome;

/// Identifies one run request for one editor. Later tickets supersede
/// earlier ones for the same editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket {
    editor: EditorId,
    seq: u64,
}

impl RunTicket {
    #[must_use]
    pub fn editor(&self) -> EditorId {
        self.editor
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub ticket: RunTicket,
    pub outcome: ExecutionOutcome,
}

/// Runs editor contents through a `CodeExecutor` and tracks the newest
/// request per editor, so a slow reply to an older request can be dropped
/// instead of overwriting a newer result.
pub struct RunCoordinator {
    executor: Arc<dyn CodeExecutor>,
    latest: Mutex<HashMap<EditorId, u64>>,
}

impl RunCoordinator {
    #[must_use]
    pub fn new(executor: Arc<dyn CodeExecutor>) -> Self {
        Self {
            executor,
            latest: Mutex::new(HashMap::new()),
        }
    }

    /// Issue a new ticket for `editor`, superseding any outstanding one.
    pub fn begin(&self, editor: EditorId) -> RunTicket {
        let mut latest = self
            .latest
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let seq = latest.entry(editor).or_insert(0);
        *seq += 1;
        RunTicket { editor, seq: *seq }
    }

    /// Whether `ticket` is still the newest for its editor.
    #[must_use]
    pub fn is_current(&self, ticket: &RunTicket) -> bool {
        let latest = self
            .latest
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        latest.get(&ticket.editor) == Some(&ticket.seq)
    }

    /// Execute `code` under an already issued ticket. Blank code never
    /// reaches the executor. Never fails: every failure is an outcome.
    pub async fn execute(&self, ticket: RunTicket, code: &str) -> RunReport {
        if code.trim().is_empty() {
            return RunReport {
                ticket,
                outcome: ExecutionOutcome::NoCode,
            };
        }

        let outcome = match self.executor.execute(code).await {
            Ok(response) => ExecutionOutcome::from_response(response),
            Err(err) => {
                tracing::warn!(editor = %ticket.editor, error = %err, "code execution failed");
                ExecutionOutcome::Unreachable
            }
        };
        tracing::info!(
            editor = %ticket.editor,
            seq = ticket.seq,
            success = outcome.succeeded(),
            "code run finished"
        );
        RunReport { ticket, outcome }
    }

    /// Issue a ticket and execute in one step.
    pub async fn run(&self, editor: EditorId, code: &str) -> RunReport {
        let ticket = self.begin(editor);
        self.execute(ticket, code).await
    }
}
