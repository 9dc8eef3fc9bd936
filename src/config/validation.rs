//! Configuration validation.

use std::collections::HashMap;

use super::types::OptionEntry;
use super::Config;
use crate::domain::ConfigError;

/// Validate configuration.
///
/// Uniqueness is checked per list: a type and a scope may share a value.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_entries("types", &config.types)?;
    validate_entries("scopes", &config.scopes)
}

fn validate_entries(field: &str, entries: &[OptionEntry]) -> Result<(), ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::violation(
            field,
            "must contain at least one entry",
        ));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.value.trim().is_empty() {
            return Err(ConfigError::violation(
                format!("{}[{}].value", field, i),
                "must not be empty",
            ));
        }

        if let Some(first) = seen.insert(entry.value.as_str(), i) {
            return Err(ConfigError::violation(
                format!("{}[{}].value", field, i),
                format!(
                    "duplicate value '{}' (already used by {}[{}])",
                    entry.value, field, first
                ),
            ));
        }
    }

    Ok(())
}
