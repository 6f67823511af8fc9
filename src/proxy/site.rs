//! Proxy site specification, rendering, and syntax validation.

use std::path::{Path, PathBuf};

use crate::error::{GangwayError, Result};
use crate::manifest::DeployManifest;
use crate::templates;

/// Reverse-proxy rule for one domain.
///
/// Superseded wholesale on re-run — the rendered file is replaced, never
/// merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySiteSpec {
    /// Public domain name.
    pub domain: String,
    /// Local port the upstream service listens on.
    pub upstream_port: u16,
    /// Directory served under `/static/`.
    pub static_root: PathBuf,
}

impl ProxySiteSpec {
    /// Build the spec for a manifest's site.
    pub fn from_manifest(manifest: &DeployManifest, project_root: &Path) -> Self {
        Self {
            domain: manifest.domain.clone(),
            upstream_port: manifest.upstream_port,
            static_root: manifest.static_path(project_root),
        }
    }

    /// Render the Nginx server block.
    pub fn render(&self) -> String {
        templates::render(
            templates::template("site.conf"),
            &[
                ("domain", &self.domain),
                ("upstream_port", &self.upstream_port.to_string()),
                ("static_root", &self.static_root.to_string_lossy()),
            ],
        )
    }
}

/// Structural validation of a rendered site definition.
///
/// This runs before anything is written, and is independent of the
/// `nginx -t` gate that runs before reload: a definition with mismatched
/// braces never reaches the proxy directory at all.
pub fn validate_syntax(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(GangwayError::ProxyConfigInvalid {
            message: "rendered definition is empty".to_string(),
        });
    }
    if !content.contains("server") {
        return Err(GangwayError::ProxyConfigInvalid {
            message: "rendered definition has no server block".to_string(),
        });
    }

    let mut depth: i64 = 0;
    for (lineno, line) in content.lines().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(GangwayError::ProxyConfigInvalid {
                            message: format!("unmatched '}}' at line {}", lineno + 1),
                        });
                    }
                }
                _ => {}
            }
        }
    }
    if depth != 0 {
        return Err(GangwayError::ProxyConfigInvalid {
            message: format!("{} unclosed '{{' in definition", depth),
        });
    }

    Ok(())
}
