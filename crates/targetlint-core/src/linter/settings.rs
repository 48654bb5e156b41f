//! Default build settings linter

use super::SettingsLinter;
use crate::fs::FileExistence;
use crate::issue::LintingIssue;
use crate::target::Target;

/// Checks that `.xcconfig` files exist and that the deployment target
/// matches the target's platform
#[derive(Debug, Clone)]
pub struct DefaultSettingsLinter<F> {
    fs: F,
}

impl<F: FileExistence> DefaultSettingsLinter<F> {
    /// Create a linter checking files through `fs`
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    fn lint_config_files_exist(&self, target: &Target) -> Vec<LintingIssue> {
        let Some(settings) = &target.settings else {
            return Vec::new();
        };
        settings
            .xcconfig_paths()
            .filter(|path| !self.fs.exists(path))
            .map(|path| {
                LintingIssue::error(format!(
                    "Configuration file not found at path {}",
                    path.display()
                ))
            })
            .collect()
    }
}

impl<F: FileExistence> SettingsLinter for DefaultSettingsLinter<F> {
    fn lint(&self, target: &Target) -> Vec<LintingIssue> {
        let mut issues = self.lint_config_files_exist(target);
        issues.extend(lint_platform(target));
        issues
    }
}

fn lint_platform(target: &Target) -> Option<LintingIssue> {
    let deployment_target = target.deployment_target.as_ref()?;
    if deployment_target.platform() == target.platform {
        return None;
    }
    Some(LintingIssue::error(format!(
        "Found an inconsistency between a platform `{}` and deployment target `{}`",
        target.platform,
        deployment_target.platform()
    )))
}
