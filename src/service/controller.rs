//! Service lifecycle state machine.
//!
//! States: Unregistered → Stopped (unit written, cache reloaded) →
//! Starting (start issued) → Running | Failed after one settle-delay
//! status poll. Failed is terminal for the pipeline: crash recovery after
//! a successful deploy belongs to the service manager's own restart
//! policy, not to us.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{GangwayError, Result};
use crate::fsops::write_if_changed;

use super::unit::ServiceUnitSpec;
use super::ServiceManager;

/// Default unit directory on the deploy host.
const UNIT_DIR: &str = "/etc/systemd/system";

/// Fixed pause between issuing start/restart and the single status poll.
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// How many journal lines to surface on a failed start.
const JOURNAL_LINES: u32 = 20;

/// Lifecycle position of the managed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// No unit file registered yet.
    Unregistered,
    /// Unit registered, not started by us.
    Stopped,
    /// Start/restart issued, settle poll pending.
    Starting,
    /// Settle poll reported active.
    Running,
    /// Settle poll reported inactive, or the start command failed.
    Failed,
}

/// Drives a [`ServiceUnitSpec`] through the service manager.
pub struct LifecycleController<'a> {
    spec: ServiceUnitSpec,
    manager: &'a dyn ServiceManager,
    unit_dir: PathBuf,
    settle_delay: Duration,
    state: ServiceState,
}

impl<'a> LifecycleController<'a> {
    /// Create a controller with production defaults.
    pub fn new(spec: ServiceUnitSpec, manager: &'a dyn ServiceManager) -> Self {
        Self {
            spec,
            manager,
            unit_dir: PathBuf::from(UNIT_DIR),
            settle_delay: SETTLE_DELAY,
            state: ServiceState::Unregistered,
        }
    }

    /// Override the unit directory (tests, non-standard hosts).
    pub fn with_unit_dir(mut self, dir: &Path) -> Self {
        self.unit_dir = dir.to_path_buf();
        self
    }

    /// Override the settle delay (tests).
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Current state.
    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// The unit spec this controller manages.
    pub fn spec(&self) -> &ServiceUnitSpec {
        &self.spec
    }

    /// Write the unit file, reload the manager's cache, enable on boot.
    ///
    /// Returns whether the unit file content changed. Idempotent.
    pub fn register(&mut self) -> Result<bool> {
        let path = self.spec.unit_path(&self.unit_dir);
        let changed = write_if_changed(&path, &self.spec.render())?;
        if changed {
            tracing::info!(unit = %path.display(), "unit file written");
        }

        self.manager.reload_units()?;
        self.manager.enable(&self.spec.unit_name())?;
        self.state = ServiceState::Stopped;
        Ok(changed)
    }

    /// Start the service and verify it settles into active state.
    pub fn start(&mut self) -> Result<()> {
        self.state = ServiceState::Starting;
        if let Err(e) = self.manager.start(&self.spec.unit_name()) {
            self.state = ServiceState::Failed;
            return Err(e);
        }
        self.settle_and_check()
    }

    /// Restart the service and verify it settles into active state.
    pub fn restart(&mut self) -> Result<()> {
        self.state = ServiceState::Starting;
        if let Err(e) = self.manager.restart(&self.spec.unit_name()) {
            self.state = ServiceState::Failed;
            return Err(e);
        }
        self.settle_and_check()
    }

    /// One poll after the settle delay — not a retry loop. Ongoing crash
    /// recovery is delegated to the manager's `Restart=always` policy.
    fn settle_and_check(&mut self) -> Result<()> {
        std::thread::sleep(self.settle_delay);

        let unit = self.spec.unit_name();
        if self.manager.is_active(&unit) {
            self.state = ServiceState::Running;
            tracing::info!(unit = %unit, "service active");
            return Ok(());
        }

        self.state = ServiceState::Failed;
        Err(GangwayError::ServiceStartFailure {
            service: self.spec.name.clone(),
            status: self.manager.status_output(&unit),
            journal: self.manager.journal_tail(&unit, JOURNAL_LINES),
        })
    }
}
