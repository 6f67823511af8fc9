//! Terminal reporting.
//!
//! This module provides:
//! - [`Reporter`] trait — the single abstraction every command emits
//!   pass/warn/fail output through
//! - [`TerminalReporter`] for interactive terminal usage
//! - [`PlainReporter`] for CI/non-TTY environments
//! - Status icons, theme, and spinners
//!
//! # Example
//!
//! ```
//! use gangway::ui::{create_reporter, OutputMode};
//!
//! let mut reporter = create_reporter(false, OutputMode::Quiet);
//! reporter.section("1. Runtime");
//! reporter.success("python 3.11.6 found");
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod plain;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockReporter;
pub use output::OutputMode;
pub use plain::PlainReporter;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalReporter;
pub use theme::GangwayTheme;

use crate::report::{CheckResult, RunReport};

/// Sink for all user-facing status output.
///
/// Commands never format pass/warn/fail lines themselves; they hand results
/// to a `Reporter` so terminal and CI renderings stay consistent. The trait
/// also allows capturing output in tests.
pub trait Reporter {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Emit a phase header, e.g. `"3. Configuration"`.
    fn section(&mut self, title: &str);

    /// Emit a neutral informational line.
    fn message(&mut self, msg: &str);

    /// Emit a success line.
    fn success(&mut self, msg: &str);

    /// Emit a warning line.
    fn warning(&mut self, msg: &str);

    /// Emit an error line. Shown even in quiet mode.
    fn error(&mut self, msg: &str);

    /// Emit one check result (icon, name, optional indented message).
    fn check(&mut self, result: &CheckResult);

    /// Emit the final tallied summary for a report.
    fn summary(&mut self, report: &RunReport);

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// Create the appropriate reporter for the execution context.
pub fn create_reporter(is_tty: bool, mode: OutputMode) -> Box<dyn Reporter> {
    if is_tty {
        Box::new(TerminalReporter::new(mode))
    } else {
        Box::new(PlainReporter::new(mode))
    }
}
