//! Git process runner.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs git with the given arguments.
pub trait GitRunner {
    /// Execute `git <args>`. An `Err` means the process could not be started.
    fn run(&mut self, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs the `git` found on `PATH`.
#[derive(Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    pub fn new() -> Self {
        Self
    }
}

impl GitRunner for SystemGit {
    fn run(&mut self, args: &[&str]) -> Result<CommandOutput> {
        debug!("Executing: git {:?}", args);

        let output = Command::new("git")
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success {
            warn!(code = ?result.code, "git {} failed: {}", args.join(" "), result.stderr.trim());
        }

        Ok(result)
    }
}
