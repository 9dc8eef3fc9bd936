//! Service layer containing the commit flow and its collaborators.

mod commit_service;
mod git;
mod prompt;

pub use commit_service::CommitService;
pub use git::SystemGit;
pub use prompt::TerminalPrompter;
