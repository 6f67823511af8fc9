//! Integration tests for the library API: prober, materializer, health
//! verifier, and proxy configurator wired together the way the commands
//! use them.

use std::fs;

use gangway::config::{materialize, MaterializeOutcome};
use gangway::health::{HealthVerifier, INTEGRATIONS_ENDPOINT, STATUS_ENDPOINT};
use gangway::manifest::DeployManifest;
use gangway::probe::EnvironmentProber;
use gangway::proxy::{ProxyConfigurator, ProxySiteSpec};
use gangway::report::CheckStatus;
use gangway::ui::MockReporter;
use httpmock::prelude::*;
use tempfile::TempDir;

fn scaffold_project(temp: &TempDir) {
    for dir in ["app/api", "app/services", "static"] {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
    }
    fs::write(temp.path().join("requirements.txt"), "fastapi\n").unwrap();
    fs::write(temp.path().join("README.md"), "# app\n").unwrap();
    fs::write(temp.path().join("DEPLOY.md"), "# deploy\n").unwrap();
}

#[test]
fn probe_then_materialize_then_probe_clears_config_warning() {
    let temp = TempDir::new().unwrap();
    scaffold_project(&temp);
    let manifest = DeployManifest {
        python_bin: "true".to_string(),
        ..DeployManifest::default()
    };

    let prober = EnvironmentProber::new(&manifest, temp.path());
    let before = prober.run(&mut MockReporter::new());
    assert!(before
        .results
        .iter()
        .any(|r| r.name.contains(".env") && r.status == CheckStatus::Warning));

    let outcome = materialize(
        &temp.path().join(".env"),
        &temp.path().join(".env.example"),
    )
    .unwrap();
    assert_eq!(outcome, MaterializeOutcome::SeededFromDefault);

    let after = prober.run(&mut MockReporter::new());
    // The seeded template defines every required key
    assert!(after
        .results
        .iter()
        .filter(|r| r.name.starts_with("key "))
        .all(|r| r.status == CheckStatus::Passed));
    assert!(after.is_clean());
}

#[test]
fn materialize_is_idempotent_across_runs() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join(".env");
    let example = temp.path().join(".env.example");

    materialize(&target, &example).unwrap();
    let first = fs::read(&target).unwrap();
    materialize(&target, &example).unwrap();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn health_verifier_classifies_all_three_outcomes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(STATUS_ENDPOINT);
        then.status(200).body(r#"{"status": "healthy"}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path(INTEGRATIONS_ENDPOINT);
        then.status(200).body(r#"{"wildberries_api": {}}"#);
    });

    let verifier = HealthVerifier::new(&server.url(""));
    let report = verifier.run(&mut MockReporter::new());

    // Status probe passes, integrations probe lacks the marker
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.exit_code(), 1);

    // Unreachable host: warnings only, exit code stays zero
    let dead = HealthVerifier::new("http://127.0.0.1:1");
    let report = dead.run(&mut MockReporter::new());
    assert_eq!(report.warned, 2);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn proxy_configurator_places_and_enables_the_site() {
    let temp = TempDir::new().unwrap();
    let manifest = DeployManifest::default();
    let spec = ProxySiteSpec::from_manifest(&manifest, temp.path());
    let configurator = ProxyConfigurator::new(spec).with_nginx_root(temp.path());

    configurator.install_site().unwrap();

    let available = temp.path().join("sites-available/review-assistant.ru");
    let enabled = temp.path().join("sites-enabled/review-assistant.ru");
    let content = fs::read_to_string(&available).unwrap();

    assert!(content.contains("proxy_pass http://127.0.0.1:8000;"));
    assert!(content.contains("server_name review-assistant.ru;"));
    assert!(enabled.symlink_metadata().is_ok());
}
