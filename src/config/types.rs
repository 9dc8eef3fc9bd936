//! Configuration data types.

use serde::{Deserialize, Serialize};

use super::validation;
use crate::domain::ConfigError;

/// Prompt text used for the commit message when `subject` is not set.
pub const DEFAULT_SUBJECT_PROMPT: &str = "Enter your commit message";

/// Resolved configuration consumed by the prompt and git steps.
///
/// Built once per invocation by [`super::ConfigService::resolve`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Custom prompt text for the commit message (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Selectable commit types
    pub types: Vec<OptionEntry>,

    /// Selectable commit scopes
    pub scopes: Vec<OptionEntry>,

    /// Git automation flags
    pub git: GitSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject: None,
            types: default_types(),
            scopes: default_scopes(),
            git: GitSettings::default(),
        }
    }
}

impl Config {
    /// Validate semantic rules that the field decoders cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)
    }

    /// Prompt text for the commit message. A blank `subject` counts as unset.
    pub fn subject_prompt(&self) -> &str {
        self.subject
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_SUBJECT_PROMPT)
    }
}

/// One selectable commit type or scope.
///
/// ```toml
/// [[types]]
/// value = "feat"
/// label = "A new feature"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Text inserted into the commit message
    pub value: String,

    /// Human-readable description shown in the picker
    pub label: String,
}

impl OptionEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Git automation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Run `git add .` before committing
    pub auto_add_all: bool,

    /// Run `git push` after a successful commit
    pub auto_push: bool,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            auto_add_all: true,
            auto_push: false,
        }
    }
}

/// Built-in commit types.
pub fn default_types() -> Vec<OptionEntry> {
    vec![
        OptionEntry::new("fix", "A bug fix"),
        OptionEntry::new("feat", "A new feature"),
        OptionEntry::new("chore", "Other changes"),
    ]
}

/// Built-in commit scopes.
pub fn default_scopes() -> Vec<OptionEntry> {
    vec![
        OptionEntry::new("page", "Page changes"),
        OptionEntry::new("component", "Component changes"),
        OptionEntry::new("server", "Server changes"),
        OptionEntry::new("db", "Database changes"),
        OptionEntry::new("repo", "Project changes"),
        OptionEntry::new("release", "A new Release"),
        OptionEntry::new("docs", "Documentation changes"),
        OptionEntry::new("tests", "Test changes"),
    ]
}
