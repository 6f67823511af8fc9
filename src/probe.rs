//! Environment probing.
//!
//! Purely observational checks over the deployment host: runtime present,
//! virtual environment created, packages importable, configuration
//! complete, project structure and documentation in place. Checks are
//! logically independent; the phase grouping exists for the operator's
//! benefit only. Nothing here mutates the host.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::{EnvFile, REQUIRED_KEYS};
use crate::manifest::DeployManifest;
use crate::report::{CheckResult, RunReport};
use crate::shell;
use crate::ui::Reporter;

/// Runs the fixed battery of environment checks against a project root.
pub struct EnvironmentProber<'a> {
    manifest: &'a DeployManifest,
    project_root: PathBuf,
}

impl<'a> EnvironmentProber<'a> {
    /// Create a prober for the given project root.
    pub fn new(manifest: &'a DeployManifest, project_root: &Path) -> Self {
        Self {
            manifest,
            project_root: project_root.to_path_buf(),
        }
    }

    /// Run every phase, emitting sections and checks through the reporter,
    /// and return the aggregated report.
    pub fn run(&self, reporter: &mut dyn Reporter) -> RunReport {
        let mut report = RunReport::new("environment");

        let phases: [(&str, Vec<CheckResult>); 5] = [
            ("1. Runtime", self.runtime_checks()),
            ("2. Packages", self.package_checks()),
            ("3. Configuration", self.config_checks()),
            ("4. Project structure", self.structure_checks()),
            ("5. Documentation", self.doc_checks()),
        ];

        for (title, results) in phases {
            reporter.section(title);
            for result in results {
                reporter.check(&result);
                report.record(result);
            }
        }

        report
    }

    /// Python interpreter, virtual environment directory, and package
    /// manifest. The venv is optional-but-recommended: absence warns.
    pub fn runtime_checks(&self) -> Vec<CheckResult> {
        let mut results = Vec::new();

        results.push(match self.python_version() {
            Some(version) => {
                CheckResult::passed_with("python runtime", format!("Python {}", version))
            }
            None if shell::execute_check(&self.manifest.python_bin, &["--version"]) => {
                CheckResult::passed("python runtime")
            }
            None => CheckResult::failed(
                "python runtime",
                format!("'{}' not found on PATH", self.manifest.python_bin),
            ),
        });

        let venv = self.manifest.venv_path(&self.project_root);
        results.push(if venv.is_dir() {
            CheckResult::passed("virtual environment")
        } else {
            CheckResult::warning(
                "virtual environment",
                format!(
                    "{}/ not created yet — run `gangway setup`",
                    self.manifest.venv_dir
                ),
            )
        });

        results.push(CheckResult::from_presence(
            format!("manifest {}", self.manifest.requirements),
            self.manifest.requirements_path(&self.project_root).is_file(),
            "package manifest not found",
        ));

        results
    }

    /// Importability of each required package inside the venv.
    pub fn package_checks(&self) -> Vec<CheckResult> {
        let python = self.manifest.venv_python(&self.project_root);
        if !python.exists() {
            return vec![CheckResult::warning(
                "package imports",
                "virtual environment absent, imports not evaluated",
            )];
        }

        let python = python.to_string_lossy().to_string();
        self.manifest
            .required_packages
            .iter()
            .map(|pkg| {
                let statement = format!("import {}", pkg);
                if shell::execute_check(&python, &["-c", statement.as_str()]) {
                    CheckResult::passed(statement)
                } else {
                    CheckResult::failed(statement, "module not importable — run `gangway setup`")
                }
            })
            .collect()
    }

    /// Presence of the env file and of every required key in it.
    ///
    /// A missing file is a Warning, not a Failure: the materializer creates
    /// it automatically on the next `setup` or `deploy`.
    pub fn config_checks(&self) -> Vec<CheckResult> {
        let path = self.manifest.env_path(&self.project_root);
        if !path.is_file() {
            return vec![CheckResult::warning(
                format!("config {}", self.manifest.env_file),
                "not present — `gangway setup` will create it",
            )];
        }

        let mut results = vec![CheckResult::passed(format!(
            "config {}",
            self.manifest.env_file
        ))];

        match EnvFile::load(&path) {
            Ok(parsed) => {
                for key in REQUIRED_KEYS {
                    results.push(CheckResult::from_presence(
                        format!("key {}", key),
                        parsed.contains_key(key),
                        "key not defined in config",
                    ));
                }
            }
            Err(e) => {
                results.push(CheckResult::failed(
                    format!("config {}", self.manifest.env_file),
                    format!("unreadable: {}", e),
                ));
            }
        }

        results
    }

    /// Presence of required project sub-paths. Failed iff absent,
    /// regardless of content.
    pub fn structure_checks(&self) -> Vec<CheckResult> {
        self.manifest
            .required_paths
            .iter()
            .map(|rel| {
                CheckResult::from_presence(
                    format!("path {}", rel),
                    self.project_root.join(rel).exists(),
                    "path not found",
                )
            })
            .collect()
    }

    /// Presence of required documentation files.
    pub fn doc_checks(&self) -> Vec<CheckResult> {
        self.manifest
            .required_docs
            .iter()
            .map(|rel| {
                CheckResult::from_presence(
                    format!("doc {}", rel),
                    self.project_root.join(rel).is_file(),
                    "file not found",
                )
            })
            .collect()
    }

    fn python_version(&self) -> Option<String> {
        let result = shell::execute(
            &self.manifest.python_bin,
            &["--version"],
            &shell::CommandOptions::default(),
        )
        .ok()?;
        if !result.success {
            return None;
        }
        // `python3 --version` historically wrote to stderr
        let combined = result.combined_output();
        let re = Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok()?;
        re.captures(&combined)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;
    use crate::ui::MockReporter;
    use tempfile::TempDir;

    fn manifest_with_python(python_bin: &str) -> DeployManifest {
        DeployManifest {
            python_bin: python_bin.to_string(),
            ..DeployManifest::default()
        }
    }

    fn scaffold_project(temp: &TempDir) {
        for dir in ["app/api", "app/services", "static"] {
            std::fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        std::fs::write(temp.path().join("requirements.txt"), "fastapi\n").unwrap();
        std::fs::write(temp.path().join("README.md"), "# app\n").unwrap();
        std::fs::write(temp.path().join("DEPLOY.md"), "# deploy\n").unwrap();
    }

    #[test]
    fn runtime_check_fails_when_interpreter_missing() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_with_python("definitely-not-a-real-python-xyz");
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.runtime_checks();
        assert_eq!(results[0].status, CheckStatus::Failed);
    }

    #[test]
    fn runtime_check_passes_with_working_interpreter() {
        let temp = TempDir::new().unwrap();
        // `echo --version` exits zero; stands in for a python binary
        let manifest = manifest_with_python("echo");
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.runtime_checks();
        assert_eq!(results[0].status, CheckStatus::Passed);
    }

    #[test]
    fn missing_venv_is_a_warning_not_a_failure() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_with_python("echo");
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.runtime_checks();
        assert_eq!(results[1].status, CheckStatus::Warning);
    }

    #[test]
    fn package_checks_warn_without_venv() {
        let temp = TempDir::new().unwrap();
        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.package_checks();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, CheckStatus::Warning);
    }

    #[cfg(unix)]
    #[test]
    fn package_checks_pass_when_imports_succeed() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("venv/bin");
        std::fs::create_dir_all(&bin).unwrap();
        let python = bin.join("python");
        std::fs::write(&python, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&python, std::fs::Permissions::from_mode(0o755)).unwrap();

        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.package_checks();
        assert_eq!(results.len(), manifest.required_packages.len());
        assert!(results.iter().all(|r| r.status == CheckStatus::Passed));
    }

    #[cfg(unix)]
    #[test]
    fn package_checks_fail_when_imports_fail() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("venv/bin");
        std::fs::create_dir_all(&bin).unwrap();
        let python = bin.join("python");
        std::fs::write(&python, "#!/bin/sh\nexit 1\n").unwrap();
        std::fs::set_permissions(&python, std::fs::Permissions::from_mode(0o755)).unwrap();

        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.package_checks();
        assert!(results.iter().all(|r| r.status == CheckStatus::Failed));
    }

    #[test]
    fn config_checks_warn_when_file_absent() {
        let temp = TempDir::new().unwrap();
        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.config_checks();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, CheckStatus::Warning);
    }

    #[test]
    fn config_checks_flag_each_missing_key() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".env"),
            "OZON_CLIENT_ID=x\nOZON_API_KEY=y\n",
        )
        .unwrap();
        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.config_checks();
        let failed: Vec<&CheckResult> = results
            .iter()
            .filter(|r| r.status == CheckStatus::Failed)
            .collect();
        // All required keys except the two defined ones
        assert_eq!(failed.len(), REQUIRED_KEYS.len() - 2);
        assert!(failed.iter().any(|r| r.name.contains("DATABASE_URL")));
    }

    #[test]
    fn config_checks_pass_with_full_template() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".env"),
            crate::templates::template("default.env"),
        )
        .unwrap();
        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.config_checks();
        assert!(results.iter().all(|r| r.status == CheckStatus::Passed));
    }

    #[test]
    fn structure_checks_fail_iff_path_absent() {
        let temp = TempDir::new().unwrap();
        scaffold_project(&temp);
        std::fs::remove_dir_all(temp.path().join("static")).unwrap();

        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.structure_checks();
        for result in &results {
            if result.name == "path static" {
                assert_eq!(result.status, CheckStatus::Failed);
            } else {
                assert_eq!(result.status, CheckStatus::Passed, "{}", result.name);
            }
        }
    }

    #[test]
    fn doc_checks_ignore_file_content() {
        let temp = TempDir::new().unwrap();
        // Empty files still count as present
        std::fs::write(temp.path().join("README.md"), "").unwrap();
        std::fs::write(temp.path().join("DEPLOY.md"), "").unwrap();

        let manifest = DeployManifest::default();
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let results = prober.doc_checks();
        assert!(results.iter().all(|r| r.status == CheckStatus::Passed));
    }

    #[test]
    fn run_reports_through_reporter_and_counts() {
        let temp = TempDir::new().unwrap();
        scaffold_project(&temp);
        let manifest = manifest_with_python("echo");
        let prober = EnvironmentProber::new(&manifest, temp.path());

        let mut reporter = MockReporter::new();
        let report = prober.run(&mut reporter);

        assert_eq!(
            report.results.len(),
            report.passed + report.warned + report.failed
        );
        assert!(reporter.contains("1. Runtime"));
        assert!(reporter.contains("5. Documentation"));
    }
}
