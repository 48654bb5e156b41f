//! Linters
//!
//! [`TargetLinter`] runs the per-target rules and hands build settings and
//! build phase actions to the [`SettingsLinter`] and [`ActionLinter`] it was
//! built with. The defaults used by the CLI are [`DefaultSettingsLinter`] and
//! [`DefaultActionLinter`].
//!
//! # Example
//!
//! ```rust,ignore
//! use targetlint_core::{LocalFileSystem, TargetLinter};
//!
//! let linter = TargetLinter::with_defaults(LocalFileSystem);
//! for issue in linter.lint(&target, &LocalFileSystem) {
//!     println!("{issue}");
//! }
//! ```

mod action;
mod settings;
mod target;

pub use action::DefaultActionLinter;
pub use settings::DefaultSettingsLinter;
pub use target::TargetLinter;

use crate::action::TargetAction;
use crate::issue::LintingIssue;
use crate::target::Target;

/// Lints the build settings of a target
pub trait SettingsLinter {
    /// Issues found in `target`'s settings
    fn lint(&self, target: &Target) -> Vec<LintingIssue>;
}

/// Lints a single build phase action
pub trait ActionLinter {
    /// Issues found in `action`
    fn lint(&self, action: &TargetAction) -> Vec<LintingIssue>;
}

impl<T: SettingsLinter + ?Sized> SettingsLinter for &T {
    fn lint(&self, target: &Target) -> Vec<LintingIssue> {
        (**self).lint(target)
    }
}

impl<T: SettingsLinter + ?Sized> SettingsLinter for Box<T> {
    fn lint(&self, target: &Target) -> Vec<LintingIssue> {
        (**self).lint(target)
    }
}

impl<T: ActionLinter + ?Sized> ActionLinter for &T {
    fn lint(&self, action: &TargetAction) -> Vec<LintingIssue> {
        (**self).lint(action)
    }
}

impl<T: ActionLinter + ?Sized> ActionLinter for Box<T> {
    fn lint(&self, action: &TargetAction) -> Vec<LintingIssue> {
        (**self).lint(action)
    }
}
