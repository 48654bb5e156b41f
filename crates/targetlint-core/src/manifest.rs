//! Manifest loading
//!
//! A manifest is a YAML file describing either a single target or a list of
//! targets under `targets:`. Relative paths inside it are resolved against
//! the directory the manifest lives in.
//!
//! # Example
//!
//! ```yaml
//! targets:
//!   - name: App
//!     platform: ios
//!     product: app
//!     bundle_id: com.example.app
//!     sources: [Sources/main.swift]
//!   - name: Core
//!     platform: ios
//!     product: static_library
//!     bundle_id: com.example.core
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::target::Target;

/// File name looked up when a manifest path points at a directory
pub const MANIFEST_FILE_NAME: &str = "target.yaml";

#[derive(Deserialize)]
struct TargetList {
    targets: Vec<Target>,
}

/// Targets loaded from a manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Targets in declaration order, with paths resolved
    pub targets: Vec<Target>,

    /// Directory relative paths were resolved against
    pub base_path: PathBuf,
}

impl Manifest {
    /// Load a manifest from a file, or from `target.yaml` in a directory
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let manifest = Manifest::load("./MyApp")?;
    /// for target in &manifest.targets {
    ///     println!("{} ({})", target.name, target.product);
    /// }
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let (manifest_path, base_path) = if path.is_dir() {
            (path.join(MANIFEST_FILE_NAME), path.to_path_buf())
        } else {
            (path.to_path_buf(), manifest_dir(path))
        };

        if !manifest_path.exists() {
            return Err(Error::ManifestNotFound {
                path: manifest_path.display().to_string(),
            });
        }

        tracing::debug!(path = %manifest_path.display(), "loading manifest");
        let contents = std::fs::read_to_string(&manifest_path)?;
        Self::parse(&contents, &base_path)
    }

    /// Parse manifest contents, resolving relative paths against `base_path`
    ///
    /// A top-level `targets` key selects the list form; anything else is
    /// parsed as a single target.
    pub fn parse(contents: &str, base_path: &Path) -> Result<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(contents)?;
        let mut targets = if document.get("targets").is_some() {
            serde_yaml::from_str::<TargetList>(contents)?.targets
        } else {
            vec![serde_yaml::from_str::<Target>(contents)?]
        };

        if targets.is_empty() {
            return Err(Error::ManifestInvalid {
                message: "manifest doesn't define any targets".to_string(),
            });
        }

        for target in &mut targets {
            if target.product_name.is_empty() {
                target.product_name = target.name.clone();
            }
            target.resolve_paths(base_path);
        }

        Ok(Self {
            targets,
            base_path: base_path.to_path_buf(),
        })
    }

    /// Look up a target by name
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.name == name)
    }
}

/// Directory containing a manifest file, `.` for a bare file name
fn manifest_dir(manifest_path: &Path) -> PathBuf {
    manifest_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf()
}
