//! Commit flow: prompt, preview, then add, commit and push.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::CommitMessage;
use crate::service::git::{CommandOutput, GitRunner};
use crate::service::prompt::Prompter;

/// How a commit run ended.
///
/// Git failures are reported to the user but are not errors: the run stops
/// at the failing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Message shown, no git command executed
    DryRun { message: String },
    /// `git add .` failed; nothing was committed
    AddFailed,
    /// `git commit` failed
    CommitFailed,
    /// The commit succeeded but `git push` failed
    PushFailed,
    /// The commit succeeded
    Committed { pushed: bool },
}

/// Service that drives one commit.
pub struct CommitService<'a> {
    config: &'a Config,
    prompter: &'a mut dyn Prompter,
    git: &'a mut dyn GitRunner,
    dry_run: bool,
}

impl<'a> CommitService<'a> {
    pub fn new(
        config: &'a Config,
        prompter: &'a mut dyn Prompter,
        git: &'a mut dyn GitRunner,
        dry_run: bool,
    ) -> Self {
        Self {
            config,
            prompter,
            git,
            dry_run,
        }
    }

    /// Run the flow, writing progress to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<CommitOutcome> {
        let message = self.ask()?;
        let message = message.to_string();
        info!(message = %message, dry_run = self.dry_run, "Commit message assembled");

        writeln!(out, "\n{}", "📝 Commit message:".blue())?;
        writeln!(out, "{}{}", "└─ ".blue(), message.yellow().dimmed())?;

        if self.dry_run {
            writeln!(
                out,
                "\n{}",
                "✓ Dry run completed - no git commands executed".green()
            )?;
            return Ok(CommitOutcome::DryRun { message });
        }

        if self.config.git.auto_add_all {
            writeln!(out, "\n{}", "📦 Adding all changes...".blue())?;
            let output = self.git.run(&["add", "."])?;
            if !output.success {
                report_failure(out, "✗ Failed to add changes", &output)?;
                return Ok(CommitOutcome::AddFailed);
            }
            writeln!(out, "{}", "✓ Successfully added all changes".green())?;
        }

        writeln!(out, "\n{}", "💾 Committing changes...".blue())?;
        let output = self.git.run(&["commit", "-m", message.as_str()])?;
        if !output.success {
            report_failure(out, "✗ Failed to commit changes", &output)?;
            return Ok(CommitOutcome::CommitFailed);
        }
        writeln!(out, "{}", "✓ Successfully committed changes".green())?;
        writeln!(
            out,
            "{}{}",
            "└─ ".green(),
            output.stdout.trim().yellow().dimmed()
        )?;

        if !self.config.git.auto_push {
            debug!("auto_push disabled, skipping push");
            return Ok(CommitOutcome::Committed { pushed: false });
        }

        writeln!(out, "\n{}", "🚀 Pushing changes...".blue())?;
        let output = self.git.run(&["push"])?;
        if !output.success {
            report_failure(out, "✗ Failed to push changes", &output)?;
            return Ok(CommitOutcome::PushFailed);
        }
        writeln!(out, "{}", "✓ Successfully pushed changes".green())?;

        Ok(CommitOutcome::Committed { pushed: true })
    }

    fn ask(&mut self) -> Result<CommitMessage> {
        let kind = self
            .prompter
            .select("Select the type of change", &self.config.types)?;
        let scope = self.prompter.select("Select the scope", &self.config.scopes)?;
        let description = self.prompter.input_message(self.config.subject_prompt())?;

        Ok(CommitMessage::new(kind, scope, description))
    }
}

fn report_failure<W: Write>(out: &mut W, headline: &str, output: &CommandOutput) -> Result<()> {
    writeln!(out, "{}", headline.red())?;
    writeln!(out, "{}{}", "└─ ".red(), output.stderr.trim().dimmed())?;
    Ok(())
}
