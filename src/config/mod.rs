//! Configuration management module.
//!
//! Handles TOML configuration loading, schema decoding with defaults,
//! validation, fallback to built-in defaults, and default file generation.

mod schema;
mod service;
mod status;
mod types;
mod validation;

pub use service::ConfigService;
pub use status::Resolution;
pub use types::{Config, OptionEntry};

#[cfg(test)]
pub use types::GitSettings;
