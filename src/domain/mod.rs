//! Domain layer.
//!
//! This module contains:
//! - Configuration error taxonomy
//! - Commit message assembly
//! - Logger with rotation

mod error;
pub mod logger;
mod message;

pub use error::ConfigError;
pub use message::CommitMessage;
