//! Default build phase action linter

use std::path::PathBuf;

use super::ActionLinter;
use crate::action::TargetAction;
use crate::fs::FileExistence;
use crate::issue::LintingIssue;

/// Checks that an action has something to run and that it can be found
#[derive(Debug, Clone)]
pub struct DefaultActionLinter<F> {
    fs: F,
    search_paths: Vec<PathBuf>,
}

impl<F: FileExistence> DefaultActionLinter<F> {
    /// Create a linter looking tools up in `search_paths`
    pub fn new(fs: F, search_paths: Vec<PathBuf>) -> Self {
        Self { fs, search_paths }
    }

    /// Create a linter looking tools up in the directories of `PATH`
    pub fn from_env(fs: F) -> Self {
        let search_paths = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        Self::new(fs, search_paths)
    }

    fn lint_tool_exists(&self, tool: &str) -> Option<LintingIssue> {
        let found = self
            .search_paths
            .iter()
            .any(|dir| self.fs.exists(&dir.join(tool)));
        if found {
            return None;
        }
        Some(LintingIssue::error(format!(
            "The action tool '{}' was not found in the environment",
            tool
        )))
    }
}

impl<F: FileExistence> ActionLinter for DefaultActionLinter<F> {
    fn lint(&self, action: &TargetAction) -> Vec<LintingIssue> {
        let mut issues = Vec::new();

        if action.tool.is_none() && action.path.is_none() {
            issues.push(LintingIssue::error(format!(
                "The action '{}' doesn't have a tool or a path",
                action.name
            )));
        }
        if let Some(tool) = &action.tool {
            issues.extend(self.lint_tool_exists(tool));
        }
        if let Some(path) = &action.path
            && !self.fs.exists(path)
        {
            issues.push(LintingIssue::error(format!(
                "The action path {} doesn't exist",
                path.display()
            )));
        }

        issues
    }
}
