//! Deploy manifest loading.
//!
//! Deployment parameters live in an optional `gangway.yml` at the project
//! root. Every field has a default tuned for the review-assistant service,
//! so the tool runs with no manifest and no arguments; a manifest overrides
//! the parts that differ per host.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GangwayError, Result};

/// Manifest file name looked up in the project root.
pub const MANIFEST_FILE: &str = "gangway.yml";

/// Declarative description of one deployment target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DeployManifest {
    /// Application name used in unit descriptions and headers.
    pub app_name: String,

    /// Public domain the proxy serves.
    pub domain: String,

    /// systemd unit name (without the `.service` suffix).
    pub service_name: String,

    /// Local port the application listens on.
    pub upstream_port: u16,

    /// Python interpreter used to create the virtual environment.
    pub python_bin: String,

    /// Virtual environment directory, relative to the project root.
    pub venv_dir: String,

    /// Package manifest path, relative to the project root.
    pub requirements: String,

    /// Configuration file path, relative to the project root.
    pub env_file: String,

    /// Static asset directory, relative to the project root.
    pub static_dir: String,

    /// Base URL for health probes.
    pub health_base: String,

    /// Contact email passed to the ACME client. Registration happens
    /// without an email when absent.
    pub admin_email: Option<String>,

    /// Packages whose importability the prober verifies.
    pub required_packages: Vec<String>,

    /// Project sub-paths that must exist.
    pub required_paths: Vec<String>,

    /// Documentation files that must exist.
    pub required_docs: Vec<String>,
}

impl Default for DeployManifest {
    fn default() -> Self {
        Self {
            app_name: "review-assistant".to_string(),
            domain: "review-assistant.ru".to_string(),
            service_name: "review-assistant".to_string(),
            upstream_port: 8000,
            python_bin: "python3".to_string(),
            venv_dir: "venv".to_string(),
            requirements: "requirements.txt".to_string(),
            env_file: ".env".to_string(),
            static_dir: "static".to_string(),
            health_base: "http://127.0.0.1:8000".to_string(),
            admin_email: None,
            required_packages: vec![
                "fastapi".to_string(),
                "sqlalchemy".to_string(),
                "openai".to_string(),
                "httpx".to_string(),
            ],
            required_paths: vec![
                "app".to_string(),
                "app/api".to_string(),
                "app/services".to_string(),
                "static".to_string(),
            ],
            required_docs: vec!["README.md".to_string(), "DEPLOY.md".to_string()],
        }
    }
}

impl DeployManifest {
    /// Load the manifest from `<root>/gangway.yml`, falling back to
    /// defaults when the file is absent. A present-but-invalid manifest is
    /// a fatal error naming the path.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no manifest, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| GangwayError::ManifestParse {
            path,
            message: e.to_string(),
        })
    }

    /// Virtual environment directory.
    pub fn venv_path(&self, root: &Path) -> PathBuf {
        root.join(&self.venv_dir)
    }

    /// Python interpreter inside the virtual environment.
    pub fn venv_python(&self, root: &Path) -> PathBuf {
        self.venv_path(root).join("bin").join("python")
    }

    /// `bin/` directory of the virtual environment (service PATH override).
    pub fn venv_bin(&self, root: &Path) -> PathBuf {
        self.venv_path(root).join("bin")
    }

    /// Package manifest path.
    pub fn requirements_path(&self, root: &Path) -> PathBuf {
        root.join(&self.requirements)
    }

    /// Configuration file path.
    pub fn env_path(&self, root: &Path) -> PathBuf {
        root.join(&self.env_file)
    }

    /// Static asset directory.
    pub fn static_path(&self, root: &Path) -> PathBuf {
        root.join(&self.static_dir)
    }

    /// Start command for the managed service.
    pub fn exec_start(&self, root: &Path) -> String {
        format!(
            "{} -m uvicorn main:app --host 0.0.0.0 --port {}",
            self.venv_python(root).display(),
            self.upstream_port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_cover_the_review_assistant() {
        let manifest = DeployManifest::default();
        assert_eq!(manifest.domain, "review-assistant.ru");
        assert_eq!(manifest.upstream_port, 8000);
        assert_eq!(
            manifest.required_packages,
            vec!["fastapi", "sqlalchemy", "openai", "httpx"]
        );
    }

    #[test]
    fn load_without_manifest_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let manifest = DeployManifest::load(temp.path()).unwrap();
        assert_eq!(manifest.service_name, "review-assistant");
    }

    #[test]
    fn load_reads_overrides() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILE),
            "domain: shop.example.com\nupstream_port: 9001\n",
        )
        .unwrap();

        let manifest = DeployManifest::load(temp.path()).unwrap();
        assert_eq!(manifest.domain, "shop.example.com");
        assert_eq!(manifest.upstream_port, 9001);
        // Untouched fields keep their defaults
        assert_eq!(manifest.venv_dir, "venv");
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "domian: typo.example.com\n").unwrap();

        let err = DeployManifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, GangwayError::ManifestParse { .. }));
        assert!(err.to_string().contains("gangway.yml"));
    }

    #[test]
    fn load_rejects_malformed_yaml() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "domain: [unclosed\n").unwrap();

        assert!(DeployManifest::load(temp.path()).is_err());
    }

    #[test]
    fn derived_paths_join_the_root() {
        let manifest = DeployManifest::default();
        let root = Path::new("/srv/review-assistant");

        assert_eq!(
            manifest.venv_python(root),
            PathBuf::from("/srv/review-assistant/venv/bin/python")
        );
        assert_eq!(
            manifest.env_path(root),
            PathBuf::from("/srv/review-assistant/.env")
        );
    }

    #[test]
    fn exec_start_uses_venv_interpreter_and_port() {
        let manifest = DeployManifest::default();
        let cmd = manifest.exec_start(Path::new("/srv/app"));
        assert!(cmd.contains("/srv/app/venv/bin/python"));
        assert!(cmd.contains("--port 8000"));
        assert!(cmd.contains("uvicorn"));
    }
}
