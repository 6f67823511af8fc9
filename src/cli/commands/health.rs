//! `health` command — service health probing.

use std::path::{Path, PathBuf};

use crate::cli::args::HealthArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::health::HealthVerifier;
use crate::manifest::DeployManifest;
use crate::ui::Reporter;

/// Runs the Health Verifier against the configured base URL.
pub struct HealthCommand {
    project_root: PathBuf,
    args: HealthArgs,
}

impl HealthCommand {
    /// Create the command for a project root.
    pub fn new(project_root: &Path, args: HealthArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for HealthCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let manifest = DeployManifest::load(&self.project_root)?;
        let base = self
            .args
            .base
            .clone()
            .unwrap_or_else(|| manifest.health_base.clone());

        reporter.section(&format!("Health probes against {}", base));

        let verifier = HealthVerifier::new(&base);
        let report = verifier.run(reporter);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            reporter.summary(&report);
            if report.warned > 0 {
                reporter.message(&format!(
                    "Server not reachable? Start it with: systemctl start {}",
                    manifest.service_name
                ));
            }
        }

        Ok(CommandResult::from_failures(report.exit_code()))
    }
}
