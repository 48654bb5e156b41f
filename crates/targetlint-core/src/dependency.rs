//! Target dependencies
//!
//! Dependencies are compared by value: two entries with the same kind and the
//! same fields are the same dependency.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::target::resolve;

/// Whether an SDK must be present at runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdkStatus {
    /// Linked as required
    #[default]
    Required,
    /// Weakly linked
    Optional,
}

/// Something a target depends on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dependency {
    /// Another target in the same project
    Target {
        /// Target name
        name: String,
    },

    /// A target in another project
    Project {
        /// Target name
        target: String,
        /// Path to the other project
        path: PathBuf,
    },

    /// A precompiled framework
    Framework {
        /// Framework path
        path: PathBuf,
    },

    /// A precompiled library
    Library {
        /// Library path
        path: PathBuf,
        /// Directory with the library's public headers
        public_headers: PathBuf,
    },

    /// A Swift package product
    Package {
        /// Product name
        product: String,
    },

    /// A system SDK
    Sdk {
        /// SDK name, e.g. `ARKit.framework`
        name: String,
        /// Link status
        #[serde(default)]
        status: SdkStatus,
    },
}

impl Dependency {
    /// Kind of dependency, for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Dependency::Target { .. } => "target",
            Dependency::Project { .. } => "project",
            Dependency::Framework { .. } => "framework",
            Dependency::Library { .. } => "library",
            Dependency::Package { .. } => "package",
            Dependency::Sdk { .. } => "sdk",
        }
    }

    /// Name identifying the dependency, for messages
    pub fn name(&self) -> String {
        match self {
            Dependency::Target { name } | Dependency::Sdk { name, .. } => name.clone(),
            Dependency::Project { target, .. } => target.clone(),
            Dependency::Package { product } => product.clone(),
            Dependency::Framework { path } | Dependency::Library { path, .. } => {
                path.display().to_string()
            }
        }
    }

    pub(crate) fn resolve_paths(&mut self, base: &Path) {
        match self {
            Dependency::Project { path, .. } | Dependency::Framework { path } => {
                resolve(base, path);
            }
            Dependency::Library {
                path,
                public_headers,
            } => {
                resolve(base, path);
                resolve(base, public_headers);
            }
            Dependency::Target { .. } | Dependency::Package { .. } | Dependency::Sdk { .. } => {}
        }
    }
}
