//! Dependency installation.
//!
//! Ensures the virtual environment exists and holds every package from the
//! manifest. Fail-fast: any non-zero exit aborts the workflow, since every
//! later stage assumes a working runtime.

use std::path::{Path, PathBuf};

use crate::error::{GangwayError, Result};
use crate::manifest::DeployManifest;
use crate::shell::{self, CommandOptions};
use crate::ui::Reporter;

/// Installs the declared packages into the project's virtual environment.
pub struct DependencyInstaller<'a> {
    manifest: &'a DeployManifest,
    project_root: PathBuf,
}

impl<'a> DependencyInstaller<'a> {
    /// Create an installer for the given project root.
    pub fn new(manifest: &'a DeployManifest, project_root: &Path) -> Self {
        Self {
            manifest,
            project_root: project_root.to_path_buf(),
        }
    }

    /// Create the venv when missing, upgrade pip, install the manifest.
    ///
    /// Idempotent — re-running with an unchanged manifest is a no-op modulo
    /// version drift.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<()> {
        if !self.manifest.requirements_path(&self.project_root).is_file() {
            return Err(GangwayError::MissingPrerequisite {
                tool: self.manifest.requirements.clone(),
                hint: "package manifest not found in project root".to_string(),
            });
        }

        self.ensure_venv(reporter)?;

        let python = self
            .manifest
            .venv_python(&self.project_root)
            .to_string_lossy()
            .to_string();

        // The installer upgrades itself before touching the manifest
        self.pip_step(
            reporter,
            "upgrading pip",
            &python,
            &["-m", "pip", "install", "--upgrade", "pip"],
        )?;

        self.pip_step(
            reporter,
            "installing packages",
            &python,
            &[
                "-m",
                "pip",
                "install",
                "-r",
                self.manifest.requirements.as_str(),
            ],
        )?;

        Ok(())
    }

    fn ensure_venv(&self, reporter: &mut dyn Reporter) -> Result<()> {
        let venv = self.manifest.venv_path(&self.project_root);
        if venv.is_dir() {
            reporter.message(&format!("virtual environment {} present", self.manifest.venv_dir));
            return Ok(());
        }

        let mut spinner = reporter.start_spinner("creating virtual environment");
        let result = shell::execute(
            &self.manifest.python_bin,
            &["-m", "venv", self.manifest.venv_dir.as_str()],
            &self.options(reporter),
        )?;

        if result.success {
            spinner.finish_success(&format!("virtual environment {} created", self.manifest.venv_dir));
            Ok(())
        } else {
            spinner.finish_error("virtual environment creation failed");
            reporter.error(&result.combined_output());
            Err(GangwayError::InstallFailure {
                step: format!("{} -m venv {}", self.manifest.python_bin, self.manifest.venv_dir),
                code: result.exit_code,
            })
        }
    }

    fn pip_step(
        &self,
        reporter: &mut dyn Reporter,
        label: &str,
        python: &str,
        args: &[&str],
    ) -> Result<()> {
        let mut spinner = reporter.start_spinner(label);
        let result = shell::execute(python, args, &self.options(reporter))?;

        if result.success {
            spinner.finish_success(label);
            Ok(())
        } else {
            spinner.finish_error(&format!("{} failed", label));
            reporter.error(&result.combined_output());
            Err(GangwayError::InstallFailure {
                step: format!("{} {}", python, args.join(" ")),
                code: result.exit_code,
            })
        }
    }

    fn options(&self, reporter: &dyn Reporter) -> CommandOptions {
        CommandOptions {
            cwd: Some(self.project_root.clone()),
            inherit_stdio: reporter.output_mode().shows_tool_output(),
            ..Default::default()
        }
    }
}
