//! Configuration schema.
//!
//! Each top-level field is decoded on its own so that a violation can be
//! reported with the path of the offending value (`types[2]`, `git`, ...)
//! and so that fields default independently of each other: a file that only
//! sets `types` still gets the built-in scopes.

use toml::{Table, Value};
use tracing::debug;

use super::types::{default_scopes, default_types, Config, GitSettings, OptionEntry};
use crate::domain::ConfigError;

/// Decode and validate a parsed TOML document.
///
/// A document consisting of nothing but a `[default]` table is unwrapped
/// first, so both layouts are accepted.
pub fn from_table(table: Table) -> Result<Config, ConfigError> {
    let mut table = unwrap_default(table);

    let types = decode_entries(table.remove("types"), "types", default_types)?;
    let scopes = decode_entries(table.remove("scopes"), "scopes", default_scopes)?;
    let subject = decode_subject(table.remove("subject"))?;
    let git = decode_git(table.remove("git"))?;

    for key in table.keys() {
        debug!(key = %key, "Ignoring unknown config key");
    }

    let config = Config {
        types,
        scopes,
        subject,
        git,
    };
    config.validate()?;
    Ok(config)
}

/// Configuration produced by an empty document: the built-in defaults.
pub fn defaults() -> Config {
    from_table(Table::new()).unwrap_or_default()
}

fn unwrap_default(mut table: Table) -> Table {
    if table.len() == 1 && matches!(table.get("default"), Some(Value::Table(_))) {
        if let Some(Value::Table(inner)) = table.remove("default") {
            return inner;
        }
    }
    table
}

fn decode_entries(
    value: Option<Value>,
    field: &str,
    default: fn() -> Vec<OptionEntry>,
) -> Result<Vec<OptionEntry>, ConfigError> {
    let items = match value {
        None => return Ok(default()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ConfigError::violation(
                field,
                format!("expected an array of tables, found {}", other.type_str()),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            item.try_into::<OptionEntry>()
                .map_err(|e| ConfigError::violation(format!("{}[{}]", field, i), e.message()))
        })
        .collect()
}

fn decode_subject(value: Option<Value>) -> Result<Option<String>, ConfigError> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(ConfigError::violation(
            "subject",
            format!("expected a string, found {}", other.type_str()),
        )),
    }
}

fn decode_git(value: Option<Value>) -> Result<GitSettings, ConfigError> {
    match value {
        None => Ok(GitSettings::default()),
        Some(Value::Table(table)) => Value::Table(table)
            .try_into::<GitSettings>()
            .map_err(|e| ConfigError::violation("git", e.message())),
        Some(other) => Err(ConfigError::violation(
            "git",
            format!("expected a table, found {}", other.type_str()),
        )),
    }
}
