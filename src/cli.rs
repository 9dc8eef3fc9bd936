//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Package version, read once from the crate metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interactive conventional-commit helper
#[derive(Parser)]
#[command(
    name = "commit-helper",
    version = VERSION,
    about = "Interactive conventional-commit helper",
    long_about = "Prompts for a commit type, scope and message, builds a \
                  `type(scope): message` commit, and optionally runs git add, \
                  commit and push for you."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file (default: ./commit.config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Show the commit message without running git
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands. Without one, the interactive commit runs.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// Validate configuration file
    Check,
    /// Print the resolved configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Display version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_commit() {
        let cli = Cli::try_parse_from(["commit-helper", "--dry-run", "--config", "c.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.dry_run);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["commit-helper", "check", "-c", "other.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
    }
}
