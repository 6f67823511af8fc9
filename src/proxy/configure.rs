//! Proxy site placement and reload gating.

use std::path::{Path, PathBuf};

use crate::error::{GangwayError, Result};
use crate::fsops::write_if_changed;
use crate::shell::{self, CommandOptions};

use super::site::{validate_syntax, ProxySiteSpec};

/// Default Nginx configuration root on the deploy host.
const NGINX_ROOT: &str = "/etc/nginx";

/// Places and enables a rendered site definition, gating every reload on
/// configuration validity.
pub struct ProxyConfigurator {
    spec: ProxySiteSpec,
    nginx_root: PathBuf,
}

impl ProxyConfigurator {
    /// Create a configurator with the production Nginx root.
    pub fn new(spec: ProxySiteSpec) -> Self {
        Self {
            spec,
            nginx_root: PathBuf::from(NGINX_ROOT),
        }
    }

    /// Override the Nginx root (tests, non-standard hosts).
    pub fn with_nginx_root(mut self, root: &Path) -> Self {
        self.nginx_root = root.to_path_buf();
        self
    }

    /// Path of this site's definition under sites-available.
    pub fn site_path(&self) -> PathBuf {
        self.nginx_root.join("sites-available").join(&self.spec.domain)
    }

    /// Path of this site's symlink under sites-enabled.
    pub fn enabled_path(&self) -> PathBuf {
        self.nginx_root.join("sites-enabled").join(&self.spec.domain)
    }

    /// Validate, write, enable, and clear the default site.
    ///
    /// The prior definition for the domain is replaced wholesale. Returns
    /// whether the definition content changed.
    pub fn install_site(&self) -> Result<bool> {
        let rendered = self.spec.render();
        validate_syntax(&rendered)?;

        let site_path = self.site_path();
        if let Some(parent) = site_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let changed = write_if_changed(&site_path, &rendered)?;

        self.enable_site(&site_path)?;
        self.disable_default_site()?;

        tracing::info!(domain = %self.spec.domain, changed, "site definition installed");
        Ok(changed)
    }

    /// Run the proxy's own configuration check. Must pass before any
    /// reload — a proxy must never be reloaded with a broken config.
    pub fn validate(&self) -> Result<()> {
        let result = shell::execute("nginx", &["-t"], &CommandOptions::default())?;
        if result.success {
            Ok(())
        } else {
            Err(GangwayError::ProxyConfigInvalid {
                message: result.combined_output(),
            })
        }
    }

    /// Reload the proxy process. Callers must run [`validate`] first.
    ///
    /// [`validate`]: Self::validate
    pub fn reload(&self) -> Result<()> {
        let result = shell::execute(
            "systemctl",
            &["reload", "nginx"],
            &CommandOptions::default(),
        )?;
        if result.success {
            Ok(())
        } else {
            Err(GangwayError::CommandFailed {
                command: "systemctl reload nginx".to_string(),
                code: result.exit_code,
            })
        }
    }

    fn enable_site(&self, site_path: &Path) -> Result<()> {
        let enabled = self.enabled_path();
        if let Some(parent) = enabled.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Recreate the symlink so it always points at the current file
        if enabled.symlink_metadata().is_ok() {
            std::fs::remove_file(&enabled)?;
        }

        #[cfg(unix)]
        std::os::unix::fs::symlink(site_path, &enabled)?;
        #[cfg(not(unix))]
        std::fs::copy(site_path, &enabled)?;

        Ok(())
    }

    fn disable_default_site(&self) -> Result<()> {
        let default_site = self.nginx_root.join("sites-enabled").join("default");
        if default_site.symlink_metadata().is_ok() {
            std::fs::remove_file(&default_site)?;
            tracing::debug!("default site disabled");
        }
        Ok(())
    }
}
