//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Reporter;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, emitting output through the reporter.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use. For verification commands this is the Failed
    /// counter; zero iff no check failed.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a result from a failed-check count.
    pub fn from_failures(failed: i32) -> Self {
        Self {
            success: failed == 0,
            exit_code: failed,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command. `check` runs when no subcommand is
    /// given.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Health(args)) => {
                let cmd = super::health::HealthCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Setup(args)) => {
                let cmd = super::setup::SetupCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Deploy(args)) => {
                let cmd = super::deploy::DeployCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Restart(args)) => {
                let cmd = super::restart::RestartCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(reporter)
            }
            None => {
                let cmd = super::check::CheckCommand::new(
                    &self.project_root,
                    crate::cli::args::CheckArgs::default(),
                );
                cmd.execute(reporter)
            }
        }
    }
}
