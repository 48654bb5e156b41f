//! Build settings model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::target::resolve;

/// Value of a single build setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Scalar value
    String(String),
    /// List value
    Array(Vec<String>),
}

/// Settings for one build configuration (e.g. `Debug`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Settings applied on top of the base settings
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,

    /// Optional `.xcconfig` file backing the configuration
    #[serde(default)]
    pub xcconfig: Option<PathBuf>,
}

/// Build settings of a target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Settings shared by every configuration
    #[serde(default)]
    pub base: BTreeMap<String, SettingValue>,

    /// Named configurations
    #[serde(default)]
    pub configurations: BTreeMap<String, Configuration>,
}

impl Settings {
    /// `.xcconfig` files referenced by the configurations, in name order
    pub fn xcconfig_paths(&self) -> impl Iterator<Item = &Path> {
        self.configurations
            .values()
            .filter_map(|configuration| configuration.xcconfig.as_deref())
    }

    pub(crate) fn resolve_paths(&mut self, base: &Path) {
        for configuration in self.configurations.values_mut() {
            if let Some(path) = &mut configuration.xcconfig {
                resolve(base, path);
            }
        }
    }
}
