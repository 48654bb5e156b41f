//! Linting issues reported by the linters

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a [`LintingIssue`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious, but the target is still usable
    Warning,
    /// The target is structurally or semantically invalid
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A problem found while linting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LintingIssue {
    /// Human-readable description
    pub reason: String,

    /// Severity of the problem
    pub severity: Severity,
}

impl LintingIssue {
    /// Create an issue
    pub fn new(reason: impl Into<String>, severity: Severity) -> Self {
        Self {
            reason: reason.into(),
            severity,
        }
    }

    /// Shorthand for an [`Severity::Error`] issue
    pub fn error(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Error)
    }

    /// Shorthand for a [`Severity::Warning`] issue
    pub fn warning(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Warning)
    }

    /// Whether this issue is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for LintingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.reason)
    }
}
