//! Integration tests for linting targets loaded from manifests
//!
//! Tests use temporary directories with real file fixtures to verify:
//! - Relative manifest paths resolve against the manifest directory
//! - File existence rules see the real filesystem
//! - Default settings and action linters are wired in
//! - Multi-target manifests lint each target independently

use std::path::Path;
use targetlint_core::{LintingIssue, LocalFileSystem, Manifest, Severity, TargetLinter};
use tempfile::TempDir;

/// Helper to create a temporary project directory with standard structure.
///
/// Returns a `TempDir` that automatically cleans up when dropped.
fn setup_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    for sub in ["Sources", "Resources", "Support", "Configs", "scripts"] {
        std::fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    std::fs::write(dir.path().join("Sources/main.swift"), "print(1)\n").unwrap();
    dir
}

fn touch(dir: &TempDir, relative: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "").unwrap();
}

fn lint_manifest(dir: &Path) -> Vec<(String, Vec<LintingIssue>)> {
    let manifest = Manifest::load(dir).unwrap();
    let linter = TargetLinter::with_defaults(LocalFileSystem);
    manifest
        .targets
        .iter()
        .map(|target| (target.name.clone(), linter.lint(target, &LocalFileSystem)))
        .collect()
}

// =============================================================================
// Clean targets
// =============================================================================

#[test]
fn test_clean_target_has_no_issues() {
    let dir = setup_project();
    touch(&dir, "Support/Info.plist");
    touch(&dir, "Support/App.entitlements");
    touch(&dir, "Configs/Debug.xcconfig");
    touch(&dir, "Model.xcdatamodeld/v2.xcdatamodel");
    touch(&dir, "scripts/generate.sh");

    std::fs::write(
        dir.path().join("target.yaml"),
        r#"
name: App
platform: ios
product: app
bundle_id: com.example.${TARGET_NAME}
deployment_target:
  platform: ios
  version: "16.0"
info_plist: Support/Info.plist
entitlements: Support/App.entitlements
settings:
  configurations:
    Debug:
      xcconfig: Configs/Debug.xcconfig
sources:
  - Sources/main.swift
resources:
  - Resources
core_data_models:
  - path: Model.xcdatamodeld
    current_version: v2
actions:
  - name: Generate
    path: scripts/generate.sh
dependencies:
  - type: package
    product: Logging
"#,
    )
    .unwrap();

    let results = lint_manifest(dir.path());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].1, vec![]);
}

// =============================================================================
// Missing files
// =============================================================================

#[test]
fn test_missing_files_are_errors() {
    let dir = setup_project();
    touch(&dir, "Model.xcdatamodeld/v1.xcdatamodel");

    std::fs::write(
        dir.path().join("target.yaml"),
        r#"
name: App
platform: ios
product: app
bundle_id: com.example.app
info_plist: Support/Info.plist
entitlements: Support/App.entitlements
settings:
  configurations:
    Release:
      xcconfig: Configs/Release.xcconfig
sources:
  - Sources/main.swift
core_data_models:
  - path: Model.xcdatamodeld
    current_version: v2
actions:
  - name: Generate
    path: scripts/missing.sh
"#,
    )
    .unwrap();

    let results = lint_manifest(dir.path());
    let issues = &results[0].1;
    let root = dir.path().display().to_string();

    assert!(issues.iter().all(|i| i.severity == Severity::Error));
    assert_eq!(
        issues.iter().map(|i| i.reason.clone()).collect::<Vec<_>>(),
        vec![
            format!("Info.plist file not found at path {root}/Support/Info.plist"),
            format!("Entitlements file not found at path {root}/Support/App.entitlements"),
            format!("Configuration file not found at path {root}/Configs/Release.xcconfig"),
            format!(
                "The default version of the Core Data model at path {root}/Model.xcdatamodeld, v2, does not exist. There should be a file at {root}/Model.xcdatamodeld/v2.xcdatamodel"
            ),
            format!("The action path {root}/scripts/missing.sh doesn't exist"),
        ]
    );
}

// =============================================================================
// Multiple targets
// =============================================================================

#[test]
fn test_targets_linted_independently() {
    let dir = setup_project();
    touch(&dir, "Resources/Core.bundle/data.json");

    std::fs::write(
        dir.path().join("target.yaml"),
        r#"
targets:
  - name: App
    platform: ios
    product: app
    bundle_id: com.example.app
    sources: [Sources/main.swift]
    dependencies:
      - type: target
        name: Core
      - type: target
        name: Core
  - name: Core
    platform: ios
    product: static_library
    bundle_id: com.example.core
    sources: [Sources/main.swift]
    resources:
      - folder: Resources/Core.bundle
"#,
    )
    .unwrap();

    let results = lint_manifest(dir.path());
    assert_eq!(results.len(), 2);

    let (app, app_issues) = &results[0];
    assert_eq!(app, "App");
    assert_eq!(
        app_issues,
        &vec![LintingIssue::warning(
            "Target 'App' has duplicate target dependency specified: 'Core'"
        )]
    );

    let (core, core_issues) = &results[1];
    assert_eq!(core, "Core");
    assert_eq!(
        core_issues,
        &vec![LintingIssue::error(
            "Target Core cannot contain resources. static library targets don't support resources"
        )]
    );
}

#[test]
fn test_absolute_paths_are_kept() {
    let dir = setup_project();
    let other = TempDir::new().unwrap();
    let plist = other.path().join("Shared-Info.plist");
    std::fs::write(&plist, "").unwrap();

    std::fs::write(
        dir.path().join("target.yaml"),
        format!(
            "name: App\nplatform: macos\nproduct: app\nbundle_id: com.example.app\nsources: [Sources/main.swift]\ninfo_plist: {}\n",
            plist.display()
        ),
    )
    .unwrap();

    let results = lint_manifest(dir.path());
    assert!(results[0].1.is_empty());
}
