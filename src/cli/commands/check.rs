//! `check` command — environment probing.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::manifest::DeployManifest;
use crate::probe::EnvironmentProber;
use crate::ui::Reporter;

/// Runs the Environment Prober and reports the tally.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create the command for a project root.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let manifest = DeployManifest::load(&self.project_root)?;

        reporter.message(&format!(
            "Checking {} environment in {}",
            manifest.app_name,
            self.project_root.display()
        ));

        let prober = EnvironmentProber::new(&manifest, &self.project_root);
        let report = prober.run(reporter);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            reporter.summary(&report);
            if report.is_clean() {
                reporter.success("environment ready");
            } else {
                reporter.message("Fix the failed checks above, then re-run `gangway check`.");
            }
        }

        Ok(CommandResult::from_failures(report.exit_code()))
    }
}
