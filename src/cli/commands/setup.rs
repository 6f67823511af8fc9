//! `setup` command — dependency install and config materialization.

use std::path::{Path, PathBuf};

use crate::cli::args::SetupArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::{materialize, MaterializeOutcome};
use crate::error::{GangwayError, Result};
use crate::install::DependencyInstaller;
use crate::manifest::DeployManifest;
use crate::shell;
use crate::ui::Reporter;

/// Installs dependencies into the venv and seeds the config file.
pub struct SetupCommand {
    project_root: PathBuf,
    #[allow(dead_code)]
    args: SetupArgs,
}

impl SetupCommand {
    /// Create the command for a project root.
    pub fn new(project_root: &Path, args: SetupArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let manifest = DeployManifest::load(&self.project_root)?;

        if shell::binary_on_path(&manifest.python_bin).is_none() {
            return Err(GangwayError::MissingPrerequisite {
                tool: manifest.python_bin.clone(),
                hint: "install Python 3 before running setup".to_string(),
            });
        }

        reporter.section("Dependencies");
        let installer = DependencyInstaller::new(&manifest, &self.project_root);
        installer.run(reporter)?;

        reporter.section("Configuration");
        let env_path = manifest.env_path(&self.project_root);
        let example = self.project_root.join(format!("{}.example", manifest.env_file));
        match materialize(&env_path, &example)? {
            MaterializeOutcome::AlreadyPresent => {
                reporter.message(&format!(
                    "{} already present, left untouched",
                    manifest.env_file
                ));
            }
            MaterializeOutcome::SeededFromExample => {
                reporter.success(&format!(
                    "{} created from {}.example",
                    manifest.env_file, manifest.env_file
                ));
            }
            MaterializeOutcome::SeededFromDefault => {
                reporter.success(&format!("{} created with placeholder values", manifest.env_file));
            }
        }

        reporter.message(&format!(
            "Edit {} with real credentials before starting the service.",
            env_path.display()
        ));

        Ok(CommandResult::success())
    }
}
