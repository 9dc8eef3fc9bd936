//! Configuration service for resolving and generating config files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::schema;
use super::status::{ConfigStatus, Resolution};
use super::Config;
use crate::domain::ConfigError;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_FILE_NAME: &str = "commit.config.toml";

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path (relative to the invocation directory).
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_FILE_NAME)
    }

    /// Resolve the configuration for this invocation.
    ///
    /// Never fails: a missing, malformed or invalid file is replaced by the
    /// built-in defaults and described in the returned status.
    pub fn resolve(path: Option<&Path>) -> Resolution {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        match Self::load(&path) {
            Ok(config) => {
                info!(
                    path = %path.display(),
                    types = config.types.len(),
                    scopes = config.scopes.len(),
                    "Loaded config"
                );
                Resolution {
                    config,
                    status: ConfigStatus::Loaded { path },
                }
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "Falling back to default config");
                let status = if error.is_not_found() {
                    ConfigStatus::NotFound { path, explicit }
                } else {
                    ConfigStatus::Invalid { path, error }
                };
                Resolution {
                    config: schema::defaults(),
                    status,
                }
            }
        }
    }

    /// Load and validate configuration from file, without fallback.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::from_read(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse and validate configuration content read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Config, ConfigError> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| ConfigError::SourceMalformed {
                path: path.to_path_buf(),
                message: describe_parse_error(content, &e),
            })?;
        schema::from_table(table)
    }

    /// Generate default configuration file at the specified path.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn generate_at(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        r#"# commit-helper configuration file
# Every key is optional; missing keys fall back to the built-in defaults.

# Prompt shown when asking for the commit message
# subject = "Enter your commit message"

# Commit types offered in the first prompt
[[types]]
value = "fix"
label = "A bug fix"

[[types]]
value = "feat"
label = "A new feature"

[[types]]
value = "chore"
label = "Other changes"

# Scopes offered in the second prompt
[[scopes]]
value = "page"
label = "Page changes"

[[scopes]]
value = "component"
label = "Component changes"

[[scopes]]
value = "server"
label = "Server changes"

[[scopes]]
value = "db"
label = "Database changes"

[[scopes]]
value = "repo"
label = "Project changes"

[[scopes]]
value = "release"
label = "A new Release"

[[scopes]]
value = "docs"
label = "Documentation changes"

[[scopes]]
value = "tests"
label = "Test changes"

[git]
# Run `git add .` before committing (default: true)
auto_add_all = true
# Run `git push` after committing (default: false)
auto_push = false
"#
        .to_string()
    }
}

fn describe_parse_error(content: &str, err: &toml::de::Error) -> String {
    match err.span() {
        Some(span) => {
            let line = content[..span.start.min(content.len())].lines().count().max(1);
            format!("line {}: {}", line, err.message().trim())
        }
        None => err.message().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_generated_content_matches_defaults() {
        let config =
            ConfigService::parse(Path::new("generated"), &ConfigService::default_config_content())
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_missing_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let resolution = ConfigService::resolve(Some(&path));

        assert_eq!(resolution.config, Config::default());
        assert!(matches!(
            resolution.status,
            ConfigStatus::NotFound { explicit: true, .. }
        ));
    }

    #[test]
    fn test_resolve_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[[types]\nvalue = ");
        let resolution = ConfigService::resolve(Some(&path));

        assert_eq!(resolution.config, Config::default());
        assert!(matches!(
            resolution.status,
            ConfigStatus::Invalid {
                error: ConfigError::SourceMalformed { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_non_utf8_file_is_malformed_not_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        fs::write(&path, b"subject = \"\xff\xfe\"").unwrap();
        let resolution = ConfigService::resolve(Some(&path));

        assert_eq!(resolution.config, Config::default());
        assert!(matches!(
            resolution.status,
            ConfigStatus::Invalid {
                error: ConfigError::SourceMalformed { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_directory_is_unreadable_not_missing() {
        let dir = TempDir::new().unwrap();
        let resolution = ConfigService::resolve(Some(dir.path()));

        assert_eq!(resolution.config, Config::default());
        assert!(matches!(
            resolution.status,
            ConfigStatus::Invalid {
                error: ConfigError::SourceUnreadable { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_schema_violation_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "types = [{ value = \"a\", label = \"A\" }, { value = \"a\", label = \"B\" }]",
        );
        let resolution = ConfigService::resolve(Some(&path));

        assert_eq!(resolution.config, Config::default());
        match resolution.status {
            ConfigStatus::Invalid {
                error: ConfigError::SchemaViolation { path, .. },
                ..
            } => assert_eq!(path, "types[1].value"),
            other => panic!("Expected schema violation, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[[types]]
value = "x"
label = "X"

[git]
auto_push = true
"#,
        );
        let resolution = ConfigService::resolve(Some(&path));

        assert!(!resolution.status.is_fallback());
        assert_eq!(resolution.config.types.len(), 1);
        assert_eq!(resolution.config.scopes.len(), 8);
        assert!(resolution.config.git.auto_add_all);
        assert!(resolution.config.git.auto_push);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[git]\nauto_add_all = false\n");

        let first = ConfigService::resolve(Some(&path));
        let second = ConfigService::resolve(Some(&path));
        assert_eq!(first.config, second.config);
    }

    #[test]
    fn test_malformed_message_names_line() {
        let err = ConfigService::parse(Path::new("c.toml"), "subject = \"ok\"\nbroken =\n")
            .unwrap_err();
        match err {
            ConfigError::SourceMalformed { message, .. } => {
                assert!(message.starts_with("line 2"), "{}", message)
            }
            other => panic!("Expected SourceMalformed, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "subject = \"keep me\"");

        assert!(ConfigService::generate_at(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "subject = \"keep me\"");

        ConfigService::generate_at(&path, true).unwrap();
        assert_eq!(ConfigService::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_generate_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("commit.config.toml");
        ConfigService::generate_at(&path, false).unwrap();
        assert!(path.exists());
    }
}
