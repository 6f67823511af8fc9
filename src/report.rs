//! Verification outcomes and run-level aggregation.
//!
//! Every check — filesystem probe or HTTP health probe — produces one
//! [`CheckResult`]. A command collects them into a [`RunReport`], which owns
//! the pass/warn/fail counters and determines the process exit code. The
//! report is an explicit value threaded through each check and returned,
//! never ambient mutable state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome classification for a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check succeeded.
    Passed,
    /// Optional-but-recommended condition not met, or target not reachable
    /// yet. Does not affect the exit code.
    Warning,
    /// Required condition not met.
    Failed,
}

/// One verification outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Human-readable check name, e.g. `"GET /api/health/status"`.
    pub name: String,
    pub status: CheckStatus,
    /// Detail shown under the check line, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    /// A passing result with no message.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Passed,
            message: None,
        }
    }

    /// A passing result with a detail message.
    pub fn passed_with(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Passed,
            message: Some(message.into()),
        }
    }

    /// A warning result.
    pub fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning,
            message: Some(message.into()),
        }
    }

    /// A failed result.
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed,
            message: Some(message.into()),
        }
    }

    /// Build a pass/fail result from a boolean condition.
    pub fn from_presence(name: impl Into<String>, present: bool, absent_msg: &str) -> Self {
        if present {
            Self::passed(name)
        } else {
            Self::failed(name, absent_msg)
        }
    }
}

/// Ordered sequence of check results plus counters for one verification pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// What this report covers, e.g. `"environment"` or `"health"`.
    pub subject: String,
    pub started_at: DateTime<Utc>,
    pub results: Vec<CheckResult>,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl RunReport {
    /// Start an empty report.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            started_at: Utc::now(),
            results: Vec::new(),
            passed: 0,
            warned: 0,
            failed: 0,
        }
    }

    /// Append a result and bump the matching counter.
    pub fn record(&mut self, result: CheckResult) -> &CheckResult {
        match result.status {
            CheckStatus::Passed => self.passed += 1,
            CheckStatus::Warning => self.warned += 1,
            CheckStatus::Failed => self.failed += 1,
        }
        self.results.push(result);
        self.results.last().expect("just pushed")
    }

    /// Append every result from another report.
    pub fn absorb(&mut self, other: RunReport) {
        for result in other.results {
            self.record(result);
        }
    }

    /// True when no check failed. Warnings do not count.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code: the Failed counter, zero iff no failures.
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.failed).unwrap_or(i32::MAX)
    }
}
