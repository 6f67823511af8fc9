//! Plain reporter for CI and non-TTY output.

use crate::report::{CheckResult, RunReport};

use super::spinner::SilentSpinner;
use super::{OutputMode, Reporter, SpinnerHandle, StatusKind};

/// Reporter for pipes, CI logs, and other non-TTY contexts: bracketed
/// status labels, no colors, no spinners.
pub struct PlainReporter {
    mode: OutputMode,
}

impl PlainReporter {
    /// Create a plain reporter.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl Reporter for PlainReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn section(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!();
            println!("== {} ==", title);
        }
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Success.format_plain(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Warning.format_plain(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", StatusKind::Failed.format_plain(msg));
    }

    fn check(&mut self, result: &CheckResult) {
        if !self.mode.shows_status() {
            return;
        }
        let kind = StatusKind::from(result.status);
        match &result.message {
            Some(message) => println!("{} - {}", kind.format_plain(&result.name), message),
            None => println!("{}", kind.format_plain(&result.name)),
        }
    }

    fn summary(&mut self, report: &RunReport) {
        println!();
        println!(
            "Summary ({}): {} passed, {} warnings, {} failed",
            report.subject, report.passed, report.warned, report.failed
        );
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Running.format_plain(message));
        }
        Box::new(SilentSpinner)
    }
}
