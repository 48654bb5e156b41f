//! Build phase actions (scripts run before or after compilation)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::target::resolve;

/// When an action runs relative to the target's build phases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOrder {
    /// Before sources are compiled
    #[default]
    Pre,
    /// After all other phases
    Post,
}

/// A script build phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAction {
    /// Name shown in the build log
    pub name: String,

    /// Position in the build
    #[serde(default)]
    pub order: ActionOrder,

    /// Executable looked up in the environment
    #[serde(default)]
    pub tool: Option<String>,

    /// Script path
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Arguments passed to the tool or script
    #[serde(default)]
    pub arguments: Vec<String>,
}

impl TargetAction {
    pub(crate) fn resolve_paths(&mut self, base: &Path) {
        if let Some(path) = &mut self.path {
            resolve(base, path);
        }
    }
}
