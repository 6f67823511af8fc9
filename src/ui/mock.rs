//! Mock reporter for tests.

use crate::report::{CheckResult, RunReport};

use super::{OutputMode, Reporter, SpinnerHandle};

/// Captures every emitted line instead of printing, so tests can assert on
/// what a command reported.
#[derive(Default)]
pub struct MockReporter {
    /// Recorded output lines, tagged by kind.
    pub lines: Vec<MockLine>,
}

/// One recorded reporter event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockLine {
    Section(String),
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Check(String),
    Summary(String),
}

impl MockReporter {
    /// Create an empty mock reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when any recorded line of any kind contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text().contains(needle))
    }

    /// All recorded error lines.
    pub fn errors(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                MockLine::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl MockLine {
    /// The recorded text regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            MockLine::Section(text)
            | MockLine::Message(text)
            | MockLine::Success(text)
            | MockLine::Warning(text)
            | MockLine::Error(text)
            | MockLine::Check(text)
            | MockLine::Summary(text) => text,
        }
    }
}

struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

impl Reporter for MockReporter {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn section(&mut self, title: &str) {
        self.lines.push(MockLine::Section(title.to_string()));
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(MockLine::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(MockLine::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(MockLine::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(MockLine::Error(msg.to_string()));
    }

    fn check(&mut self, result: &CheckResult) {
        let text = match &result.message {
            Some(message) => format!("{} - {}", result.name, message),
            None => result.name.clone(),
        };
        self.lines.push(MockLine::Check(text));
    }

    fn summary(&mut self, report: &RunReport) {
        self.lines.push(MockLine::Summary(format!(
            "{} passed, {} warnings, {} failed",
            report.passed, report.warned, report.failed
        )));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.lines.push(MockLine::Message(message.to_string()));
        Box::new(MockSpinner)
    }
}
