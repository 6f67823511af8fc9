//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides one canonical set of status icons and colors used
//! across all commands, replacing the per-script emoji and color literals
//! of the old deployment scripts.

use super::theme::GangwayTheme;
use crate::report::CheckStatus;

/// Canonical status kinds used across all Gangway output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check or operation succeeded.
    Success,
    /// Check or operation failed.
    Failed,
    /// Non-fatal warning.
    Warning,
    /// Operation is currently running.
    Running,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Running => "◆",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
            Self::Running => "[run]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &GangwayTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Running => theme.info.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &GangwayTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Passed => Self::Success,
            CheckStatus::Warning => Self::Warning,
            CheckStatus::Failed => Self::Failed,
        }
    }
}
