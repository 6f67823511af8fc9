//! Service unit specification and rendering.

use std::path::{Path, PathBuf};

use crate::manifest::DeployManifest;
use crate::templates;

/// Restart delay written into every unit we manage.
const RESTART_SEC: u32 = 10;

/// Declarative description of the managed process.
///
/// Created once at deploy time; changed only by re-running the deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUnitSpec {
    /// Unit name without the `.service` suffix.
    pub name: String,
    /// Human-readable unit description.
    pub description: String,
    /// Working directory for the process.
    pub working_dir: PathBuf,
    /// PATH override pointing at the venv's bin directory.
    pub venv_bin: PathBuf,
    /// Full start command.
    pub exec_start: String,
    /// Seconds systemd waits before an automatic restart.
    pub restart_sec: u32,
}

impl ServiceUnitSpec {
    /// Build the spec for a manifest's service.
    pub fn from_manifest(manifest: &DeployManifest, project_root: &Path) -> Self {
        Self {
            name: manifest.service_name.clone(),
            description: format!("{} web service", manifest.app_name),
            working_dir: project_root.to_path_buf(),
            venv_bin: manifest.venv_bin(project_root),
            exec_start: manifest.exec_start(project_root),
            restart_sec: RESTART_SEC,
        }
    }

    /// Full unit name as systemd knows it.
    pub fn unit_name(&self) -> String {
        format!("{}.service", self.name)
    }

    /// Path of the unit file inside a unit directory.
    pub fn unit_path(&self, unit_dir: &Path) -> PathBuf {
        unit_dir.join(self.unit_name())
    }

    /// Render the unit file.
    pub fn render(&self) -> String {
        templates::render(
            templates::template("app.service"),
            &[
                ("description", &self.description),
                ("working_dir", &self.working_dir.to_string_lossy()),
                ("venv_bin", &self.venv_bin.to_string_lossy()),
                ("exec_start", &self.exec_start),
                ("restart_sec", &self.restart_sec.to_string()),
            ],
        )
    }
}
