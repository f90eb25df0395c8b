//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::wizard::DEFAULT_DEPLOY_DOMAIN;

/// Outfitter - guided provisioning for SaaS template infrastructure.
#[derive(Debug, Parser)]
#[command(name = "outfitter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to provision (progress and env files live here)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Suppress instructional output
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
    /// Run the setup wizard (default if no command specified)
    Run(RunArgs),

    /// Show saved setup progress
    Status(StatusArgs),

    /// Discard saved setup progress
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Domain suffix for derived deployment and webhook URLs
    #[arg(long, value_name = "DOMAIN", default_value = DEFAULT_DEPLOY_DOMAIN)]
    pub deploy_domain: String,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            deploy_domain: DEFAULT_DEPLOY_DOMAIN.to_string(),
        }
    }
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

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

    #[test]
    fn parses_default_run() {
        let cli = Cli::try_parse_from(["outfitter"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_run_with_deploy_domain() {
        let cli =
            Cli::try_parse_from(["outfitter", "run", "--deploy-domain", "example.dev"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.deploy_domain, "example.dev"),
            other => panic!("expected run command, got {:?}", other),
        }
    }

    #[test]
    fn run_defaults_to_vercel_domain() {
        let cli = Cli::try_parse_from(["outfitter", "run"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.deploy_domain, DEFAULT_DEPLOY_DOMAIN),
            other => panic!("expected run command, got {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["outfitter", "status", "--dir", "/tmp/project"]).unwrap();
        assert_eq!(cli.dir.as_deref(), Some(std::path::Path::new("/tmp/project")));
        assert!(matches!(cli.command, Some(Commands::Status(_))));
    }

    #[test]
    fn parses_reset_force() {
        let cli = Cli::try_parse_from(["outfitter", "reset", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Reset(args)) => assert!(args.force),
            other => panic!("expected reset command, got {:?}", other),
        }
    }
}
