//! Command execution.

use crate::error::{GangwayError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Combined stdout + stderr, for surfacing tool output in errors.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Extra environment variables (merged with the process env).
    pub env: Vec<(String, String)>,

    /// Stream output to the parent's stdio instead of capturing it.
    pub inherit_stdio: bool,
}

/// Execute a program with arguments.
///
/// Spawn failure (program absent, permission denied) maps to
/// [`GangwayError::CommandFailed`]; a non-zero exit is NOT an error here —
/// callers inspect `success` and decide whether it is fatal for their stage.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.inherit_stdio {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    } else {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    }

    let command_display = display_command(program, args);
    tracing::debug!(command = %command_display, "executing");

    let output = cmd.output().map_err(|_| GangwayError::CommandFailed {
        command: command_display.clone(),
        code: None,
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        tracing::debug!(
            command = %command_display,
            code = ?output.status.code(),
            "command exited non-zero"
        );
    }

    Ok(CommandResult {
        exit_code: output.status.code(),
        success: output.status.success(),
        stdout,
        stderr,
        duration,
    })
}

/// Execute a program and report only whether it exited zero.
///
/// Spawn failures count as `false` — a tool that cannot start is a tool
/// that is not there.
pub fn execute_check(program: &str, args: &[&str]) -> bool {
    execute(program, args, &CommandOptions::default())
        .map(|r| r.success)
        .unwrap_or(false)
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
