//! Conventional commit message assembly.

use std::fmt;

/// A commit message of the form `type(scope): description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub kind: String,
    pub scope: String,
    pub description: String,
}

impl CommitMessage {
    pub fn new(
        kind: impl Into<String>,
        scope: impl Into<String>,
        description: impl AsRef<str>,
    ) -> Self {
        Self {
            kind: kind.into(),
            scope: scope.into(),
            description: description.as_ref().trim().to_string(),
        }
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.scope, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_conventional_commit() {
        let msg = CommitMessage::new("feat", "cli", "add --dry-run flag");
        assert_eq!(msg.to_string(), "feat(cli): add --dry-run flag");
    }

    #[test]
    fn test_description_is_trimmed() {
        let msg = CommitMessage::new("fix", "db", "  close pool on exit \n");
        assert_eq!(msg.to_string(), "fix(db): close pool on exit");
    }
}
