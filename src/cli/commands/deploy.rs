//! `deploy` command — the full deployment pipeline.
//!
//! Strictly linear and fail-fast: prerequisites → install → configuration →
//! service → health → proxy → certificate. A fatal stage aborts everything
//! after it; the certificate stage alone degrades to a reported
//! partial-success (site stays on plain HTTP).

use std::path::{Path, PathBuf};

use crate::cli::args::DeployArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::{materialize, MaterializeOutcome};
use crate::error::{GangwayError, Result};
use crate::health::HealthVerifier;
use crate::install::DependencyInstaller;
use crate::manifest::DeployManifest;
use crate::proxy::{AcmeClient, ProxyConfigurator, ProxySiteSpec};
use crate::report::{CheckResult, RunReport};
use crate::service::{LifecycleController, ServiceUnitSpec, Systemd};
use crate::shell;
use crate::ui::Reporter;

/// Runs the whole deployment pipeline against the local host.
pub struct DeployCommand {
    project_root: PathBuf,
    #[allow(dead_code)]
    args: DeployArgs,
}

impl DeployCommand {
    /// Create the command for a project root.
    pub fn new(project_root: &Path, args: DeployArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Verify every external tool before any mutation.
    fn check_prerequisites(
        &self,
        manifest: &DeployManifest,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        #[cfg(unix)]
        // SAFETY: geteuid has no preconditions and touches no memory.
        if unsafe { libc::geteuid() } != 0 {
            return Err(GangwayError::MissingPrerequisite {
                tool: "root privileges".to_string(),
                hint: "deploy writes unit files and proxy config — re-run with sudo".to_string(),
            });
        }

        let tools: [(&str, &str); 4] = [
            (
                manifest.python_bin.as_str(),
                "install Python 3 before deploying",
            ),
            ("systemctl", "deploy requires a systemd host"),
            ("nginx", "apt install nginx"),
            ("certbot", "apt install certbot python3-certbot-nginx"),
        ];

        for (tool, hint) in tools {
            if shell::binary_on_path(tool).is_none() {
                return Err(GangwayError::MissingPrerequisite {
                    tool: tool.to_string(),
                    hint: hint.to_string(),
                });
            }
            reporter.success(&format!("{} present", tool));
        }

        Ok(())
    }

    fn start_service(
        &self,
        manifest: &DeployManifest,
        systemd: &Systemd,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let spec = ServiceUnitSpec::from_manifest(manifest, &self.project_root);
        let mut controller = LifecycleController::new(spec, systemd);

        controller.register()?;
        reporter.success(&format!("unit {} registered", manifest.service_name));

        let mut spinner =
            reporter.start_spinner(&format!("starting {}", manifest.service_name));
        match controller.restart() {
            Ok(()) => {
                spinner.finish_success(&format!("{} active", manifest.service_name));
                Ok(())
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
                Err(e)
            }
        }
    }

    fn configure_proxy(
        &self,
        manifest: &DeployManifest,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let site = ProxySiteSpec::from_manifest(manifest, &self.project_root);
        let configurator = ProxyConfigurator::new(site);

        configurator.install_site()?;
        // Validation gates the reload — a broken rendering never reaches
        // the running proxy
        configurator.validate()?;
        configurator.reload()?;
        reporter.success(&format!(
            "{} proxying to 127.0.0.1:{}",
            manifest.domain, manifest.upstream_port
        ));
        Ok(())
    }

    fn print_remediation(&self, manifest: &DeployManifest, reporter: &mut dyn Reporter) {
        reporter.message("Useful commands:");
        reporter.message(&format!("  systemctl status {}", manifest.service_name));
        reporter.message(&format!("  journalctl -u {} -f", manifest.service_name));
        reporter.message(&format!(
            "  edit {}",
            manifest.env_path(&self.project_root).display()
        ));
    }
}

impl Command for DeployCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let manifest = DeployManifest::load(&self.project_root)?;
        let mut report = RunReport::new("deploy");

        reporter.message(&format!(
            "Deploying {} from {}",
            manifest.app_name,
            self.project_root.display()
        ));

        reporter.section("1. Prerequisites");
        self.check_prerequisites(&manifest, reporter)?;

        reporter.section("2. Dependencies");
        DependencyInstaller::new(&manifest, &self.project_root).run(reporter)?;

        reporter.section("3. Configuration");
        let env_path = manifest.env_path(&self.project_root);
        let example = self
            .project_root
            .join(format!("{}.example", manifest.env_file));
        if materialize(&env_path, &example)? == MaterializeOutcome::AlreadyPresent {
            reporter.message(&format!("{} present, left untouched", manifest.env_file));
        } else {
            reporter.success(&format!("{} seeded", manifest.env_file));
        }

        reporter.section("4. Service");
        let systemd = Systemd;
        self.start_service(&manifest, &systemd, reporter)?;
        report.record(CheckResult::passed(format!(
            "service {} active",
            manifest.service_name
        )));

        reporter.section("5. Health");
        let verifier = HealthVerifier::new(&manifest.health_base);
        report.absorb(verifier.run(reporter));

        reporter.section("6. Reverse proxy");
        self.configure_proxy(&manifest, reporter)?;
        report.record(CheckResult::passed(format!("proxy site {}", manifest.domain)));

        reporter.section("7. TLS certificate");
        match AcmeClient::new().obtain(&manifest.domain, manifest.admin_email.as_deref()) {
            Ok(()) => {
                reporter.success(&format!("certificate installed for {}", manifest.domain));
                report.record(CheckResult::passed("TLS certificate"));
            }
            Err(e) => {
                // Fatal for the TLS step only: the proxy keeps serving
                // plain HTTP, and the operator must hear that clearly
                reporter.error(&e.to_string());
                reporter.warning(&format!(
                    "{} is still serving plain HTTP — TLS was not enabled",
                    manifest.domain
                ));
                report.record(CheckResult::failed("TLS certificate", e.to_string()));
            }
        }

        reporter.summary(&report);
        self.print_remediation(&manifest, reporter);

        Ok(CommandResult::from_failures(report.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockReporter;
    use tempfile::TempDir;

    #[test]
    fn empty_project_aborts_on_a_prerequisite() {
        // Whatever the host looks like, an empty project can never get past
        // the prerequisite/install gates, and nothing is mutated.
        let temp = TempDir::new().unwrap();
        let cmd = DeployCommand::new(temp.path(), DeployArgs::default());

        let err = cmd.execute(&mut MockReporter::new()).unwrap_err();
        assert!(matches!(err, GangwayError::MissingPrerequisite { .. }));
        assert!(!temp.path().join(".env").exists());
    }
}
