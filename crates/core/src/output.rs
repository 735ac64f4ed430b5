use std::time::Duration;

/// Interim line shown while a run request is outstanding.
pub const COMPILING_MESSAGE: &str = "▶ Compiling and executing your code...";

/// Line appended after a successful run.
pub const CONFIRMATION_MESSAGE: &str = "✓ Program executed successfully";

/// Delay before the confirmation line is appended.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTone {
    Info,
    Success,
    Failure,
    Confirmation,
}

impl OutputTone {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            OutputTone::Info => "output-line output-line--info",
            OutputTone::Success => "output-line output-line--success",
            OutputTone::Failure => "output-line output-line--failure",
            OutputTone::Confirmation => "output-line output-line--confirmation",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            OutputTone::Failure => "✗ ",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub tone: OutputTone,
}

impl OutputLine {
    #[must_use]
    pub fn new(text: impl Into<String>, tone: OutputTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Text as displayed, including the failure icon.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("{}{}", self.tone.icon(), self.text)
    }
}

/// Contents of one output region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPanel {
    lines: Vec<OutputLine>,
    succeeded: bool,
}

impl OutputPanel {
    #[must_use]
    pub fn compiling() -> Self {
        Self {
            lines: vec![OutputLine::new(COMPILING_MESSAGE, OutputTone::Info)],
            succeeded: false,
        }
    }

    /// Replace the panel with `text`, one line per `\n`.
    ///
    /// A single trailing newline does not produce an extra empty line.
    #[must_use]
    pub fn render(text: &str, success: bool) -> Self {
        let tone = if success {
            OutputTone::Success
        } else {
            OutputTone::Failure
        };
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines = body
            .split('\n')
            .map(|line| OutputLine::new(line.strip_suffix('\r').unwrap_or(line), tone))
            .collect();
        Self {
            lines,
            succeeded: success,
        }
    }

    /// Append the confirmation line. Does nothing unless the panel holds a
    /// successful render that has not been confirmed yet.
    pub fn confirm(&mut self) -> bool {
        if !self.succeeded || self.is_confirmed() {
            return false;
        }
        self.lines
            .push(OutputLine::new(CONFIRMATION_MESSAGE, OutputTone::Confirmation));
        true
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.lines
            .last()
            .is_some_and(|line| line.tone == OutputTone::Confirmation)
    }

    #[must_use]
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_output_renders_one_line_per_line() {
        let mut panel = OutputPanel::render("5\n", true);
        assert_eq!(panel.lines(), &[OutputLine::new("5", OutputTone::Success)]);
        assert!(panel.confirm());
        assert_eq!(panel.lines().len(), 2);
        assert_eq!(panel.lines()[1].text, CONFIRMATION_MESSAGE);
        assert!(!panel.confirm(), "confirmation is appended once");
    }

    #[test]
    fn failure_lines_carry_icon_and_no_confirmation() {
        let mut panel = OutputPanel::render("Compilation Error:\nerror: expected ';'", false);
        let texts: Vec<String> = panel.lines().iter().map(OutputLine::display_text).collect();
        assert_eq!(texts, vec!["✗ Compilation Error:", "✗ error: expected ';'"]);
        assert!(!panel.confirm());
        assert_eq!(panel.lines().len(), 2);
    }

    #[test]
    fn interior_blank_lines_are_kept() {
        let panel = OutputPanel::render("a\n\nb", true);
        assert_eq!(panel.lines().len(), 3);
        assert_eq!(panel.lines()[1].text, "");
    }

    #[test]
    fn markup_in_output_is_kept_as_text() {
        let panel = OutputPanel::render("<b>bold</b> & <script>", true);
        assert_eq!(panel.lines()[0].text, "<b>bold</b> & <script>");
    }

    #[test]
    fn compiling_panel_is_info() {
        let mut panel = OutputPanel::compiling();
        assert_eq!(panel.lines()[0].tone, OutputTone::Info);
        assert!(!panel.confirm());
    }
}
