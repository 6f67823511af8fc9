//! `restart` command — service restart plus health re-check.

use std::path::{Path, PathBuf};

use crate::cli::args::RestartArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::{GangwayError, Result};
use crate::health::HealthVerifier;
use crate::manifest::DeployManifest;
use crate::service::{LifecycleController, ServiceUnitSpec, Systemd};
use crate::ui::Reporter;

/// Restarts the managed service and verifies it settles and responds.
pub struct RestartCommand {
    project_root: PathBuf,
    #[allow(dead_code)]
    args: RestartArgs,
}

impl RestartCommand {
    /// Create the command for a project root.
    pub fn new(project_root: &Path, args: RestartArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for RestartCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let manifest = DeployManifest::load(&self.project_root)?;

        #[cfg(unix)]
        // SAFETY: geteuid has no preconditions and touches no memory.
        if unsafe { libc::geteuid() } != 0 {
            return Err(GangwayError::MissingPrerequisite {
                tool: "root privileges".to_string(),
                hint: "restarting the service requires sudo".to_string(),
            });
        }

        let spec = ServiceUnitSpec::from_manifest(&manifest, &self.project_root);
        let systemd = Systemd;
        let mut controller = LifecycleController::new(spec, &systemd);

        let mut spinner =
            reporter.start_spinner(&format!("restarting {}", manifest.service_name));
        match controller.restart() {
            Ok(()) => {
                spinner.finish_success(&format!("{} active", manifest.service_name));
            }
            Err(e) => {
                spinner.finish_error(&format!("{} failed to start", manifest.service_name));
                if let GangwayError::ServiceStartFailure {
                    status, journal, ..
                } = &e
                {
                    reporter.error(status);
                    reporter.error(journal);
                }
                reporter.message(&format!(
                    "Inspect with: journalctl -u {} -f",
                    manifest.service_name
                ));
                return Err(e);
            }
        }

        reporter.section("Health");
        let verifier = HealthVerifier::new(&manifest.health_base);
        let report = verifier.run(reporter);
        reporter.summary(&report);

        Ok(CommandResult::from_failures(report.exit_code()))
    }
}
