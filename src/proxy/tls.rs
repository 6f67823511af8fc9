//! ACME certificate issuance.

use crate::error::{GangwayError, Result};
use crate::shell::{self, CommandOptions};

/// Non-interactive certbot invocation for one domain.
pub struct AcmeClient {
    program: String,
}

impl Default for AcmeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AcmeClient {
    /// Create a client driving the system certbot.
    pub fn new() -> Self {
        Self {
            program: "certbot".to_string(),
        }
    }

    /// Override the certbot binary (tests).
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// Obtain and install a certificate for the domain via the proxy
    /// plugin. Certbot rewrites the site definition for TLS and reloads
    /// the proxy itself on success.
    ///
    /// Failure is fatal for the TLS step only — the site keeps serving
    /// plain HTTP, and the caller must say so to the operator.
    pub fn obtain(&self, domain: &str, email: Option<&str>) -> Result<()> {
        let mut args = vec![
            "--nginx",
            "-d",
            domain,
            "--non-interactive",
            "--agree-tos",
            "--redirect",
        ];
        match email {
            Some(email) => {
                args.push("-m");
                args.push(email);
            }
            None => args.push("--register-unsafely-without-email"),
        }

        let result = shell::execute(&self.program, &args, &CommandOptions::default())?;
        if result.success {
            tracing::info!(domain, "certificate obtained");
            Ok(())
        } else {
            Err(GangwayError::CertificateIssuance {
                domain: domain.to_string(),
                message: tail(&result.combined_output(), 10),
            })
        }
    }
}

/// Last `n` lines of tool output, enough to show the ACME failure reason
/// without the full transcript.
fn tail(output: &str, n: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
