//! Managed service lifecycle.
//!
//! This module provides:
//! - [`ServiceUnitSpec`] — declarative description of the managed process
//! - [`ServiceManager`] — the seam to the OS service manager
//! - [`Systemd`] — the production implementation shelling out to
//!   `systemctl`/`journalctl`
//! - [`LifecycleController`] — the register/start/restart state machine

pub mod controller;
pub mod unit;

pub use controller::{LifecycleController, ServiceState};
pub use unit::ServiceUnitSpec;

use crate::error::{GangwayError, Result};
use crate::shell::{self, CommandOptions};

/// Operations the lifecycle controller needs from the OS service manager.
///
/// Kept as a trait so the state machine is testable without systemd on the
/// host.
pub trait ServiceManager {
    /// Reload the manager's unit definition cache.
    fn reload_units(&self) -> Result<()>;

    /// Enable the unit to start on boot.
    fn enable(&self, unit: &str) -> Result<()>;

    /// Issue a start command.
    fn start(&self, unit: &str) -> Result<()>;

    /// Issue a restart command.
    fn restart(&self, unit: &str) -> Result<()>;

    /// Whether the unit is currently active.
    fn is_active(&self, unit: &str) -> bool;

    /// The manager's own status output for the unit, for error surfacing.
    fn status_output(&self, unit: &str) -> String;

    /// Recent log lines for the unit.
    fn journal_tail(&self, unit: &str, lines: u32) -> String;
}

/// systemd-backed [`ServiceManager`].
pub struct Systemd;

impl Systemd {
    fn systemctl(&self, args: &[&str]) -> Result<()> {
        let result = shell::execute("systemctl", args, &CommandOptions::default())?;
        if result.success {
            Ok(())
        } else {
            Err(GangwayError::CommandFailed {
                command: format!("systemctl {}", args.join(" ")),
                code: result.exit_code,
            })
        }
    }
}

impl ServiceManager for Systemd {
    fn reload_units(&self) -> Result<()> {
        self.systemctl(&["daemon-reload"])
    }

    fn enable(&self, unit: &str) -> Result<()> {
        self.systemctl(&["enable", unit])
    }

    fn start(&self, unit: &str) -> Result<()> {
        self.systemctl(&["start", unit])
    }

    fn restart(&self, unit: &str) -> Result<()> {
        self.systemctl(&["restart", unit])
    }

    fn is_active(&self, unit: &str) -> bool {
        shell::execute_check("systemctl", &["is-active", "--quiet", unit])
    }

    fn status_output(&self, unit: &str) -> String {
        shell::execute(
            "systemctl",
            &["status", unit, "--no-pager", "-l"],
            &CommandOptions::default(),
        )
        .map(|r| r.combined_output())
        .unwrap_or_default()
    }

    fn journal_tail(&self, unit: &str, lines: u32) -> String {
        let lines = lines.to_string();
        shell::execute(
            "journalctl",
            &["-u", unit, "-n", lines.as_str(), "--no-pager"],
            &CommandOptions::default(),
        )
        .map(|r| r.combined_output())
        .unwrap_or_default()
    }
}
