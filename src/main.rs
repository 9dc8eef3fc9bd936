//! commit-helper: interactive conventional-commit helper
//!
//! Prompts for a commit type, scope and message, assembles a
//! `type(scope): message` commit message, and optionally runs
//! `git add`, `git commit` and `git push` according to the configuration.

mod cli;
mod config;
mod domain;
mod service;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands};
use config::{ConfigService, Resolution};
use service::{CommitService, SystemGit, TerminalPrompter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        domain::logger::init(&domain::logger::default_log_dir())?;
    }

    match &cli.command {
        None => {
            let Resolution { config, .. } = resolve(&cli)?;
            let mut prompter = TerminalPrompter::new();
            let mut git = SystemGit::new();
            let outcome = CommitService::new(&config, &mut prompter, &mut git, cli.dry_run)
                .run(&mut io::stdout().lock())?;
            debug!(outcome = ?outcome, "Commit run finished");
        }
        Some(Commands::Init { path, force }) => {
            let config_path = path.clone().unwrap_or_else(ConfigService::default_path);
            ConfigService::generate_at(&config_path, *force)?;
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Some(Commands::Check) => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(ConfigService::default_path);
            ConfigService::load(&path)
                .with_context(|| format!("Invalid configuration in {}", path.display()))?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Some(Commands::Show { json }) => {
            let Resolution { config, .. } = resolve(&cli)?;
            let rendered = if *json {
                serde_json::to_string_pretty(&config)?
            } else {
                toml::to_string_pretty(&config)?
            };
            println!("{}", rendered.trim_end());
        }
        Some(Commands::Version) => {
            println!("commit-helper {}", cli::VERSION);
        }
    }

    Ok(())
}

/// Resolve configuration and print its status line on stderr.
fn resolve(cli: &Cli) -> Result<Resolution> {
    let resolution = ConfigService::resolve(cli.config.as_deref());
    debug!(fallback = resolution.status.is_fallback(), "Config resolved");
    resolution.status.report(&mut io::stderr().lock())?;
    Ok(resolution)
}
