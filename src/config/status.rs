//! Outcome of configuration resolution and its user-facing report.

use std::io::{self, Write};
use std::path::PathBuf;

use owo_colors::OwoColorize;

use super::Config;
use crate::domain::ConfigError;

/// How the resolved configuration was obtained.
#[derive(Debug)]
pub enum ConfigStatus {
    /// The file was loaded and validated
    Loaded { path: PathBuf },
    /// No file to load; defaults are in effect
    NotFound { path: PathBuf, explicit: bool },
    /// The file was present but malformed or invalid; defaults are in effect
    Invalid { path: PathBuf, error: ConfigError },
}

impl ConfigStatus {
    /// Whether the built-in defaults replaced the user configuration.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, ConfigStatus::Loaded { .. })
    }

    /// Write the status block shown before prompting.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            ConfigStatus::Loaded { path } => {
                let source = format!("({})", path.display());
                writeln!(
                    out,
                    "{} {}",
                    "✓ Successfully parsed config".green(),
                    source.dimmed()
                )
            }
            ConfigStatus::NotFound { path, explicit } => {
                if *explicit {
                    let line = format!("✗ Config file not found: {}", path.display());
                    writeln!(out, "{}", line.yellow())?;
                } else {
                    writeln!(out, "{}", "✗ No config file found".yellow())?;
                }
                writeln!(out, "{}{}", "└─ ".yellow(), "Using built-in defaults".dimmed())
            }
            ConfigStatus::Invalid { path, error } => {
                let line = format!("✗ Failed to parse config: {}", path.display());
                writeln!(out, "{}", line.red())?;
                writeln!(out, "{}{}", "└─ ".red(), error.to_string().dimmed())
            }
        }
    }
}

/// Configuration together with how it was obtained.
#[derive(Debug)]
pub struct Resolution {
    pub config: Config,
    pub status: ConfigStatus,
}
