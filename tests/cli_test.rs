//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Scaffold a project directory that passes every filesystem check.
fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    for dir in ["app/api", "app/services", "static"] {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
    }
    fs::write(temp.path().join("requirements.txt"), "fastapi\nsqlalchemy\n").unwrap();
    fs::write(temp.path().join("README.md"), "# review assistant\n").unwrap();
    fs::write(temp.path().join("DEPLOY.md"), "# deploy\n").unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "deployment and health verification",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_lists_numbered_phases() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.arg("check");
    // Exit code depends on the host python; phases always print
    cmd.assert()
        .stdout(predicate::str::contains("1. Runtime"))
        .stdout(predicate::str::contains("4. Project structure"))
        .stdout(predicate::str::contains("5. Documentation"));
    Ok(())
}

#[test]
fn check_exit_code_counts_failures() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    // Break exactly the two documentation checks
    fs::remove_file(temp.path().join("README.md"))?;
    fs::remove_file(temp.path().join("DEPLOY.md"))?;
    // Pin the runtime to a binary that always exists so the doc failures
    // are the only ones
    fs::write(temp.path().join("gangway.yml"), "python_bin: \"true\"\n")?;

    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.arg("check");
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn check_with_clean_project_and_json_reports_counts(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(temp.path().join("gangway.yml"), "python_bin: \"true\"\n")?;

    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.args(["check", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"subject\": \"environment\""))
        .stdout(predicate::str::contains("\"failed\": 0"));
    Ok(())
}

#[test]
fn check_is_default_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(temp.path().join("gangway.yml"), "python_bin: \"true\"\n")?;

    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. Runtime"));
    Ok(())
}

#[test]
fn malformed_manifest_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("gangway.yml"), "domian: typo.example.com\n")?;

    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.arg("check");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("gangway.yml"));
    Ok(())
}

#[test]
fn health_against_dead_port_warns_and_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.args(["health", "--base", "http://127.0.0.1:1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not reachable"));
    Ok(())
}

#[test]
fn completions_emit_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gangway"));
    Ok(())
}

#[test]
fn quiet_flag_suppresses_phase_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(temp.path().join("gangway.yml"), "python_bin: \"true\"\n")?;

    let mut cmd = Command::new(cargo_bin("gangway"));
    cmd.current_dir(temp.path());
    cmd.args(["check", "--quiet"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. Runtime").not());
    Ok(())
}
