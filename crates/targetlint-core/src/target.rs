//! Target model
//!
//! A target is the unit a build system compiles into a product. Targets are
//! normally loaded from a manifest (see [`crate::manifest`]) but can be built
//! in code with [`Target::new`] and plain field assignment.
//!
//! # Example
//!
//! ```yaml
//! name: App
//! platform: ios
//! product: app
//! bundle_id: com.example.${TARGET_NAME}
//! deployment_target:
//!   platform: ios
//!   version: "15.0"
//! sources:
//!   - Sources/AppDelegate.swift
//! resources:
//!   - Resources/Assets.xcassets
//!   - folder: Resources/Fonts
//! info_plist: Support/Info.plist
//! dependencies:
//!   - type: package
//!     product: Logging
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::action::TargetAction;
use crate::dependency::Dependency;
use crate::settings::Settings;

/// Platform a target is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS
    Ios,
    /// macOS
    MacOs,
    /// watchOS
    WatchOs,
    /// tvOS
    TvOs,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "iOS",
            Platform::MacOs => "macOS",
            Platform::WatchOs => "watchOS",
            Platform::TvOs => "tvOS",
        };
        f.write_str(name)
    }
}

/// Kind of artifact a target produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    /// Application
    App,
    /// Static library
    StaticLibrary,
    /// Dynamic library
    DynamicLibrary,
    /// Dynamic framework
    Framework,
    /// Static framework
    StaticFramework,
    /// Unit test bundle
    UnitTests,
    /// UI test bundle
    UiTests,
    /// Resource bundle
    Bundle,
    /// App extension
    AppExtension,
    /// iMessage sticker pack
    StickerPackExtension,
    /// watchOS application
    WatchApp,
    /// watchOS application extension
    WatchExtension,
    /// iMessage extension
    MessagesExtension,
}

impl Product {
    /// Whether the product is a library of some kind
    pub fn is_library(&self) -> bool {
        matches!(
            self,
            Product::StaticLibrary | Product::DynamicLibrary | Product::StaticFramework
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Product::App => "app",
            Product::StaticLibrary => "static library",
            Product::DynamicLibrary => "dynamic library",
            Product::Framework => "framework",
            Product::StaticFramework => "static framework",
            Product::UnitTests => "unit tests",
            Product::UiTests => "ui tests",
            Product::Bundle => "bundle",
            Product::AppExtension => "app extension",
            Product::StickerPackExtension => "sticker pack extension",
            Product::WatchApp => "watch app",
            Product::WatchExtension => "watch extension",
            Product::MessagesExtension => "messages extension",
        };
        f.write_str(name)
    }
}

/// A file or folder copied into the product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileElement {
    /// Single file, given as a plain path
    File(PathBuf),

    /// Folder reference, copied as a whole
    Folder {
        /// Folder path
        folder: PathBuf,
    },
}

impl FileElement {
    /// Path of the file or folder
    pub fn path(&self) -> &Path {
        match self {
            FileElement::File(path) => path,
            FileElement::Folder { folder } => folder,
        }
    }

    fn path_mut(&mut self) -> &mut PathBuf {
        match self {
            FileElement::File(path) => path,
            FileElement::Folder { folder } => folder,
        }
    }
}

/// Info.plist of a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoPlist {
    /// Existing file on disk
    File(PathBuf),

    /// Content generated at build time
    Dictionary {
        /// Plist keys and values
        dictionary: serde_yaml::Mapping,
    },
}

impl InfoPlist {
    /// Path of the plist file, if there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            InfoPlist::File(path) => Some(path),
            InfoPlist::Dictionary { .. } => None,
        }
    }
}

/// Minimum OS version a target supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum DeploymentTarget {
    /// iOS deployment target
    Ios {
        /// Version, e.g. `15.0`
        version: String,
    },
    /// macOS deployment target
    MacOs {
        /// Version, e.g. `13.0`
        version: String,
    },
    /// watchOS deployment target
    WatchOs {
        /// Version, e.g. `9.0`
        version: String,
    },
    /// tvOS deployment target
    TvOs {
        /// Version, e.g. `16.0`
        version: String,
    },
}

impl DeploymentTarget {
    /// Version string as written in the manifest
    pub fn version(&self) -> &str {
        match self {
            DeploymentTarget::Ios { version }
            | DeploymentTarget::MacOs { version }
            | DeploymentTarget::WatchOs { version }
            | DeploymentTarget::TvOs { version } => version,
        }
    }

    /// Platform the deployment target applies to
    pub fn platform(&self) -> Platform {
        match self {
            DeploymentTarget::Ios { .. } => Platform::Ios,
            DeploymentTarget::MacOs { .. } => Platform::MacOs,
            DeploymentTarget::WatchOs { .. } => Platform::WatchOs,
            DeploymentTarget::TvOs { .. } => Platform::TvOs,
        }
    }
}

/// Versioned Core Data model bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreDataModel {
    /// Path to the `.xcdatamodeld` directory
    pub path: PathBuf,

    /// Name of the current version, without the `.xcdatamodel` extension
    pub current_version: String,
}

impl CoreDataModel {
    /// Path of the file the current version is expected at
    pub fn current_version_path(&self) -> PathBuf {
        self.path.join(format!("{}.xcdatamodel", self.current_version))
    }
}

/// A buildable target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Target name (only used in messages)
    pub name: String,

    /// Platform the target builds for
    pub platform: Platform,

    /// Product type
    pub product: Product,

    /// Name of the built product, defaults to the target name when loaded
    /// from a manifest
    #[serde(default)]
    pub product_name: String,

    /// Bundle identifier, may contain `${...}` or `$(...)` build variables
    pub bundle_id: String,

    /// Minimum OS version
    #[serde(default)]
    pub deployment_target: Option<DeploymentTarget>,

    /// Info.plist file or generated content
    #[serde(default)]
    pub info_plist: Option<InfoPlist>,

    /// Entitlements file
    #[serde(default)]
    pub entitlements: Option<PathBuf>,

    /// Build settings
    #[serde(default)]
    pub settings: Option<Settings>,

    /// Source files
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Files copied into the product
    #[serde(default)]
    pub resources: Vec<FileElement>,

    /// Build phase actions
    #[serde(default)]
    pub actions: Vec<TargetAction>,

    /// Dependencies, in declaration order
    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    /// Core Data models
    #[serde(default)]
    pub core_data_models: Vec<CoreDataModel>,
}

impl Target {
    /// Create a target with no files, settings or dependencies.
    ///
    /// The product name is set to the target name.
    pub fn new(
        name: impl Into<String>,
        platform: Platform,
        product: Product,
        bundle_id: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            product_name: name.clone(),
            name,
            platform,
            product,
            bundle_id: bundle_id.into(),
            deployment_target: None,
            info_plist: None,
            entitlements: None,
            settings: None,
            sources: Vec::new(),
            resources: Vec::new(),
            actions: Vec::new(),
            dependencies: Vec::new(),
            core_data_models: Vec::new(),
        }
    }

    /// Whether this platform/product combination may contain source files
    pub fn supports_sources(&self) -> bool {
        !matches!(
            (self.platform, self.product),
            (Platform::Ios, Product::Bundle)
                | (Platform::Ios, Product::StickerPackExtension)
                | (Platform::WatchOs, Product::WatchApp)
        )
    }

    /// Make every relative path in the target relative to `base`.
    ///
    /// Absolute paths are left untouched.
    pub fn resolve_paths(&mut self, base: &Path) {
        for source in &mut self.sources {
            resolve(base, source);
        }
        for resource in &mut self.resources {
            resolve(base, resource.path_mut());
        }
        if let Some(InfoPlist::File(path)) = &mut self.info_plist {
            resolve(base, path);
        }
        if let Some(path) = &mut self.entitlements {
            resolve(base, path);
        }
        if let Some(settings) = &mut self.settings {
            settings.resolve_paths(base);
        }
        for action in &mut self.actions {
            action.resolve_paths(base);
        }
        for dependency in &mut self.dependencies {
            dependency.resolve_paths(base);
        }
        for model in &mut self.core_data_models {
            resolve(base, &mut model.path);
        }
    }
}

pub(crate) fn resolve(base: &Path, path: &mut PathBuf) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Platform::Ios, Product::App, true)]
    #[case(Platform::Ios, Product::Bundle, false)]
    #[case(Platform::Ios, Product::StickerPackExtension, false)]
    #[case(Platform::WatchOs, Product::WatchApp, false)]
    #[case(Platform::WatchOs, Product::WatchExtension, true)]
    #[case(Platform::MacOs, Product::Bundle, true)]
    fn test_supports_sources(
        #[case] platform: Platform,
        #[case] product: Product,
        #[case] expected: bool,
    ) {
        let target = Target::new("Target", platform, product, "com.example.target");
        assert_eq!(target.supports_sources(), expected);
    }

    #[test]
    fn test_parse_minimal_target() {
        let yaml = r#"
name: App
platform: ios
product: app
bundle_id: com.example.app
"#;
        let target: Target = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(target.name, "App");
        assert_eq!(target.platform, Platform::Ios);
        assert_eq!(target.product, Product::App);
        assert!(target.product_name.is_empty());
        assert!(target.sources.is_empty());
        assert!(target.deployment_target.is_none());
    }

    #[test]
    fn test_parse_full_target() {
        let yaml = r#"
name: App
platform: macos
product: app
product_name: MyApp
bundle_id: com.example.app
deployment_target:
  platform: macos
  version: "13.0"
info_plist: Support/Info.plist
entitlements: Support/App.entitlements
sources:
  - Sources/main.swift
resources:
  - Resources/icon.png
  - folder: Resources/Fonts
core_data_models:
  - path: Model.xcdatamodeld
    current_version: v2
"#;
        let target: Target = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(target.product_name, "MyApp");
        assert_eq!(
            target.deployment_target,
            Some(DeploymentTarget::MacOs {
                version: "13.0".to_string()
            })
        );
        assert_eq!(
            target.info_plist.as_ref().and_then(InfoPlist::path),
            Some(Path::new("Support/Info.plist"))
        );
        assert_eq!(target.resources.len(), 2);
        assert_eq!(target.resources[1].path(), Path::new("Resources/Fonts"));
        assert_eq!(target.core_data_models[0].current_version, "v2");
    }

    #[test]
    fn test_generated_info_plist_has_no_path() {
        let yaml = r#"
dictionary:
  CFBundleDisplayName: App
"#;
        let plist: InfoPlist = serde_yaml::from_str(yaml).unwrap();
        assert!(plist.path().is_none());
    }

    #[test]
    fn test_current_version_path() {
        let model = CoreDataModel {
            path: PathBuf::from("/x/Model.xcdatamodeld"),
            current_version: "v2".to_string(),
        };
        assert_eq!(
            model.current_version_path(),
            PathBuf::from("/x/Model.xcdatamodeld/v2.xcdatamodel")
        );
    }

    #[test]
    fn test_resolve_paths_keeps_absolute() {
        let mut target = Target::new("App", Platform::Ios, Product::App, "com.example.app");
        target.sources = vec![PathBuf::from("main.swift"), PathBuf::from("/abs/lib.swift")];
        target.entitlements = Some(PathBuf::from("App.entitlements"));
        target.resolve_paths(Path::new("/project"));

        assert_eq!(target.sources[0], PathBuf::from("/project/main.swift"));
        assert_eq!(target.sources[1], PathBuf::from("/abs/lib.swift"));
        assert_eq!(
            target.entitlements,
            Some(PathBuf::from("/project/App.entitlements"))
        );
    }
}
