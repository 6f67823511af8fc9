//! Interactive terminal reporter.

use crate::report::{CheckResult, RunReport};

use super::spinner::{ProgressSpinner, SilentSpinner};
use super::theme::{should_use_colors, GangwayTheme};
use super::{OutputMode, Reporter, SpinnerHandle, StatusKind};

/// Reporter for interactive terminal sessions: colored icons, phase
/// headers, spinners.
pub struct TerminalReporter {
    mode: OutputMode,
    theme: GangwayTheme,
}

impl TerminalReporter {
    /// Create a terminal reporter, picking colors based on the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GangwayTheme::new()
        } else {
            GangwayTheme::plain()
        };
        Self { mode, theme }
    }

    /// Create a terminal reporter with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: GangwayTheme) -> Self {
        Self { mode, theme }
    }
}

impl Reporter for TerminalReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn section(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!();
            println!("{}", self.theme.header.apply_to(title));
        }
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Success.format(&self.theme, msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Warning.format(&self.theme, msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", StatusKind::Failed.format(&self.theme, msg));
    }

    fn check(&mut self, result: &CheckResult) {
        if !self.mode.shows_status() {
            return;
        }
        let kind = StatusKind::from(result.status);
        println!("{}", kind.format(&self.theme, &result.name));
        if let Some(message) = &result.message {
            println!("   {}", self.theme.dim.apply_to(message));
        }
    }

    fn summary(&mut self, report: &RunReport) {
        println!();
        println!(
            "{}",
            self.theme
                .highlight
                .apply_to(format!("Summary ({})", report.subject))
        );
        println!(
            "  {}",
            self.theme
                .success
                .apply_to(format!("passed:   {}", report.passed))
        );
        println!(
            "  {}",
            self.theme
                .warning
                .apply_to(format!("warnings: {}", report.warned))
        );
        println!(
            "  {}",
            self.theme
                .error
                .apply_to(format!("failed:   {}", report.failed))
        );
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::start(message, self.theme.clone()))
        } else {
            Box::new(SilentSpinner)
        }
    }
}
