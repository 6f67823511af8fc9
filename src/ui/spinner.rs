//! Progress spinners for long-running operations.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::theme::GangwayTheme;
use super::{SpinnerHandle, StatusKind};

/// Spinner shown while an external tool runs (pip install, service settle).
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: GangwayTheme,
}

impl ProgressSpinner {
    /// Start a new spinner with the given message.
    pub fn start(message: &str, theme: GangwayTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar, theme }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar
            .finish_with_message(StatusKind::Success.format(&self.theme, msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar
            .finish_with_message(StatusKind::Failed.format(&self.theme, msg));
    }
}

/// No-op spinner for quiet and non-TTY contexts.
pub struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, msg: &str) {
        // Errors are never swallowed, even without a spinner
        eprintln!("{}", StatusKind::Failed.format_plain(msg));
    }
}
