use review_core::OutputPanel;

use super::client::ExecutionResponse;

/// What a run produced, classified for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The editor was blank; nothing was sent.
    NoCode,
    /// Captured program output.
    Success(String),
    /// Captured standard error, usually a compiler diagnostic.
    CompileError(String),
    /// The endpoint answered with its own error message.
    Reported(String),
    /// The endpoint answered with nothing usable.
    Unusable,
    /// The endpoint could not be reached or did not answer with JSON.
    Unreachable,
}

impl ExecutionOutcome {
    /// Classify a decoded reply. Output wins over stderr, stderr over the
    /// endpoint message; empty strings count as absent.
    #[must_use]
    pub fn from_response(response: ExecutionResponse) -> Self {
        let ExecutionResponse { run, message } = response;
        let run = run.unwrap_or_default();
        if let Some(output) = run.output.filter(|s| !s.is_empty()) {
            return Self::Success(output);
        }
        if let Some(stderr) = run.stderr.filter(|s| !s.is_empty()) {
            return Self::CompileError(stderr);
        }
        if let Some(message) = message.filter(|s| !s.is_empty()) {
            return Self::Reported(message);
        }
        Self::Unusable
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether a request actually went out for this outcome.
    #[must_use]
    pub fn was_sent(&self) -> bool {
        !matches!(self, Self::NoCode)
    }

    /// Text rendered into the output region.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoCode => "Error: No code to execute".to_string(),
            Self::Success(output) => output.clone(),
            Self::CompileError(stderr) => format!("Compilation Error:\n{stderr}"),
            Self::Reported(message) => format!("Error: {message}"),
            Self::Unusable => "Error: Unable to execute code".to_string(),
            Self::Unreachable => {
                "Error: Could not connect to compiler.\nPlease check your internet connection."
                    .to_string()
            }
        }
    }

    #[must_use]
    pub fn to_panel(&self) -> OutputPanel {
        OutputPanel::render(&self.message(), self.succeeded())
    }
}
