//! Error types for commit-helper.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while loading or validating a configuration source.
///
/// Every variant is recoverable: the resolver swaps in the built-in
/// defaults and reports the error instead of returning it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist
    #[error("config file not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but could not be read (permissions, directory, ...)
    #[error("config file could not be read ({}): {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not UTF-8 text or not valid TOML
    #[error("config file is not valid TOML ({}): {message}", path.display())]
    SourceMalformed { path: PathBuf, message: String },

    /// The document does not match the configuration schema
    #[error("invalid value at `{path}`: {constraint}")]
    SchemaViolation { path: String, constraint: String },
}

impl ConfigError {
    /// Classify a failed read of the config file.
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::SourceNotFound { path, source },
            io::ErrorKind::InvalidData => Self::SourceMalformed {
                path,
                message: source.to_string(),
            },
            _ => Self::SourceUnreadable { path, source },
        }
    }

    pub(crate) fn violation(path: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            constraint: constraint.into(),
        }
    }

    /// Whether the error means there was nothing to load.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}
