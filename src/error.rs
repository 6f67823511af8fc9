//! Error types for Gangway operations.
//!
//! This module defines [`GangwayError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal pipeline conditions get their own variant so commands can abort
//!   with an actionable message (and, for service failures, the manager's
//!   own log output)
//! - Recoverable conditions (missing config file, unreachable health
//!   endpoint) are never errors — they surface as Warning check results
//! - Use `anyhow::Error` (via `GangwayError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Gangway operations.
#[derive(Debug, Error)]
pub enum GangwayError {
    /// A required tool is absent from PATH. Raised before any mutation.
    #[error("Missing prerequisite '{tool}': {hint}")]
    MissingPrerequisite { tool: String, hint: String },

    /// The package installer exited non-zero.
    #[error("Dependency install failed during '{step}' (exit code {code:?})")]
    InstallFailure { step: String, code: Option<i32> },

    /// The managed service did not reach active state after a start/restart.
    #[error("Service '{service}' failed to start")]
    ServiceStartFailure {
        service: String,
        /// Output of `systemctl status` at the time of failure.
        status: String,
        /// Recent journal lines for the unit.
        journal: String,
    },

    /// A rendered proxy site definition failed validation.
    #[error("Invalid proxy configuration: {message}")]
    ProxyConfigInvalid { message: String },

    /// The ACME client could not obtain a certificate.
    #[error("Certificate issuance failed for '{domain}': {message}")]
    CertificateIssuance { domain: String, message: String },

    /// Deploy manifest could not be parsed.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Shell command could not be spawned or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Gangway operations.
pub type Result<T> = std::result::Result<T, GangwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_prerequisite_displays_tool_and_hint() {
        let err = GangwayError::MissingPrerequisite {
            tool: "certbot".into(),
            hint: "apt install certbot python3-certbot-nginx".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("certbot"));
        assert!(msg.contains("apt install"));
    }

    #[test]
    fn install_failure_displays_step_and_code() {
        let err = GangwayError::InstallFailure {
            step: "pip install -r requirements.txt".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn service_start_failure_displays_service() {
        let err = GangwayError::ServiceStartFailure {
            service: "review-assistant".into(),
            status: "inactive (dead)".into(),
            journal: String::new(),
        };
        assert!(err.to_string().contains("review-assistant"));
    }

    #[test]
    fn proxy_config_invalid_displays_message() {
        let err = GangwayError::ProxyConfigInvalid {
            message: "unbalanced braces".into(),
        };
        assert!(err.to_string().contains("unbalanced braces"));
    }

    #[test]
    fn certificate_issuance_displays_domain() {
        let err = GangwayError::CertificateIssuance {
            domain: "review-assistant.ru".into(),
            message: "DNS challenge failed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("review-assistant.ru"));
        assert!(msg.contains("DNS challenge failed"));
    }

    #[test]
    fn manifest_parse_displays_path_and_message() {
        let err = GangwayError::ManifestParse {
            path: PathBuf::from("/srv/app/gangway.yml"),
            message: "unknown field `domian`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/app/gangway.yml"));
        assert!(msg.contains("domian"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = GangwayError::CommandFailed {
            command: "systemctl daemon-reload".into(),
            code: Some(4),
        };
        let msg = err.to_string();
        assert!(msg.contains("systemctl daemon-reload"));
        assert!(msg.contains("4"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GangwayError = io_err.into();
        assert!(matches!(err, GangwayError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GangwayError::ProxyConfigInvalid {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
