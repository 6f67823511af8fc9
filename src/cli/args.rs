//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Gangway - deployment and health verification automation.
#[derive(Debug, Parser)]
#[command(name = "gangway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output (includes external tool output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the host environment (default if no command specified)
    Check(CheckArgs),

    /// Probe the running service's health endpoints
    Health(HealthArgs),

    /// Install dependencies and seed the configuration file
    Setup(SetupArgs),

    /// Run the full deployment pipeline
    Deploy(DeployArgs),

    /// Restart the managed service and re-check health
    Restart(RestartArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Emit the report as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `health` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HealthArgs {
    /// Base URL to probe (overrides the manifest)
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// Emit the report as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {}

/// Arguments for the `deploy` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DeployArgs {}

/// Arguments for the `restart` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RestartArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["gangway"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn check_accepts_json_flag() {
        let cli = Cli::parse_from(["gangway", "check", "--json"]);
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.json),
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn health_accepts_base_override() {
        let cli = Cli::parse_from(["gangway", "health", "--base", "http://10.0.0.5:8000"]);
        match cli.command {
            Some(Commands::Health(args)) => {
                assert_eq!(args.base.as_deref(), Some("http://10.0.0.5:8000"));
            }
            other => panic!("expected health, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::parse_from(["gangway", "deploy", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Deploy(_))));
    }
}
