//! Interactive prompts for commit type, scope and message.

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::config::OptionEntry;

/// Source of the user's answers.
pub trait Prompter {
    /// Pick one of `options` and return its `value`.
    fn select(&mut self, prompt: &str, options: &[OptionEntry]) -> Result<String>;

    /// Ask for a free-text commit message; the answer is never empty.
    fn input_message(&mut self, prompt: &str) -> Result<String>;
}

/// Prompter backed by the terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, options: &[OptionEntry]) -> Result<String> {
        if options.is_empty() {
            bail!("No options available for '{}'", prompt);
        }

        let items: Vec<String> = options.iter().map(display_option).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()?;

        Ok(options[index].value.clone())
    }

    fn input_message(&mut self, prompt: &str) -> Result<String> {
        let message: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| validate_message(input))
            .interact_text()?;

        Ok(message.trim().to_string())
    }
}

/// Picker line for an option: `value - label`.
fn display_option(option: &OptionEntry) -> String {
    if option.label.is_empty() {
        option.value.clone()
    } else {
        format!("{} - {}", option.value, option.label)
    }
}

fn validate_message(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Please enter a commit message")
    } else {
        Ok(())
    }
}
