//! HTTP health verification.
//!
//! Single-shot probes against the running service: one liveness endpoint
//! and one integrations endpoint, each classified by a marker substring in
//! the response body. A transport failure is a Warning — the verifier may
//! run long before a deploy, when the server simply is not up — while a
//! response without the marker is a Failure. No retries, no polling.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::report::{CheckResult, RunReport};
use crate::ui::Reporter;

/// Liveness endpoint and the marker expected in its body.
pub const STATUS_ENDPOINT: &str = "/api/health/status";
pub const STATUS_MARKER: &str = "healthy";

/// Integrations endpoint; the body must reference the order-management
/// integration the service exists to serve.
pub const INTEGRATIONS_ENDPOINT: &str = "/api/health/integrations";
pub const INTEGRATIONS_MARKER: &str = "ozon";

/// Issues health probes against a base address.
pub struct HealthVerifier {
    client: Client,
    base: String,
}

impl HealthVerifier {
    /// Create a verifier with the default 30-second request timeout.
    pub fn new(base: &str) -> Self {
        Self::with_timeout(base, Duration::from_secs(30))
    }

    /// Create a verifier with a custom request timeout.
    pub fn with_timeout(base: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("gangway")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Run both probes, emitting each result through the reporter.
    pub fn run(&self, reporter: &mut dyn Reporter) -> RunReport {
        let mut report = RunReport::new("health");

        for result in [
            self.probe(STATUS_ENDPOINT, STATUS_MARKER),
            self.probe(INTEGRATIONS_ENDPOINT, INTEGRATIONS_MARKER),
        ] {
            reporter.check(&result);
            report.record(result);
        }

        report
    }

    /// Probe one endpoint for a marker substring.
    pub fn probe(&self, endpoint: &str, marker: &str) -> CheckResult {
        let url = format!("{}{}", self.base, endpoint);
        let name = format!("GET {}", endpoint);

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "health probe unreachable");
                return CheckResult::warning(
                    name,
                    format!("server not reachable at {} — is the service running?", url),
                );
            }
        };

        let status = response.status();
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                return CheckResult::warning(name, format!("response body unreadable: {}", e));
            }
        };

        if body.to_lowercase().contains(marker) {
            CheckResult::passed(name)
        } else {
            CheckResult::failed(
                name,
                format!("HTTP {} response did not contain '{}'", status.as_u16(), marker),
            )
        }
    }
}
