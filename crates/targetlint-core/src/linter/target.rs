//! Per-target linting rules

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use super::{ActionLinter, DefaultActionLinter, DefaultSettingsLinter, SettingsLinter};
use crate::dependency::Dependency;
use crate::fs::FileExistence;
use crate::issue::LintingIssue;
use crate::target::{Platform, Product, Target};

static BRACE_INTERPOLATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{.+\}").expect("Invalid regex pattern"));

static PAREN_INTERPOLATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\(.+\)").expect("Invalid regex pattern"));

static DEPLOYMENT_TARGET_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+\.\d+(\.\d+)?\b").expect("Invalid regex pattern"));

/// Products a platform can't build
const INCOMPATIBLE_PRODUCTS: &[(Platform, &[Product])] =
    &[(Platform::Ios, &[Product::WatchApp, Product::WatchExtension])];

/// Lints a single target.
///
/// Every rule runs on every call and the issues come back in rule order:
/// product name, platform/product compatibility, bundle identifier, sources,
/// copied files (with Info.plist and entitlements existence), library
/// resources, deployment target, settings, duplicate dependencies, Core Data
/// models, then each action in order.
#[derive(Debug, Clone)]
pub struct TargetLinter<S, A> {
    settings_linter: S,
    action_linter: A,
}

impl<F: FileExistence + Clone> TargetLinter<DefaultSettingsLinter<F>, DefaultActionLinter<F>> {
    /// Linter using the default settings and action linters, both checking
    /// files through `fs` and actions' tools against `PATH`
    pub fn with_defaults(fs: F) -> Self {
        Self::new(
            DefaultSettingsLinter::new(fs.clone()),
            DefaultActionLinter::from_env(fs),
        )
    }
}

impl<S: SettingsLinter, A: ActionLinter> TargetLinter<S, A> {
    /// Create a linter delegating settings and actions to the given linters
    pub fn new(settings_linter: S, action_linter: A) -> Self {
        Self {
            settings_linter,
            action_linter,
        }
    }

    /// Lint `target`, asking `fs` about every file it references
    pub fn lint(&self, target: &Target, fs: &dyn FileExistence) -> Vec<LintingIssue> {
        let mut issues = Vec::new();
        issues.extend(lint_product_name(target));
        issues.extend(lint_product_platform_compatibility(target));
        issues.extend(lint_bundle_identifier(target));
        issues.extend(lint_has_sources(target));
        issues.extend(lint_copied_files(target, fs));
        issues.extend(lint_library_has_no_resources(target));
        issues.extend(lint_deployment_target(target));
        issues.extend(self.settings_linter.lint(target));
        issues.extend(lint_duplicate_dependencies(target));
        issues.extend(lint_core_data_models_exist(target, fs));
        issues.extend(lint_core_data_models_current_version_exists(target, fs));
        for action in &target.actions {
            issues.extend(self.action_linter.lint(action));
        }

        tracing::debug!(
            target_name = %target.name,
            issues = issues.len(),
            errors = issues.iter().filter(|i| i.is_error()).count(),
            "linted target"
        );
        issues
    }
}

fn lint_product_name(target: &Target) -> Option<LintingIssue> {
    let valid = target
        .product_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        return None;
    }
    Some(LintingIssue::error(format!(
        "Invalid product name '{}'. This string must contain only alphanumeric (A-Z,a-z,0-9), and underscore (_) characters.",
        target.product_name
    )))
}

fn lint_product_platform_compatibility(target: &Target) -> Option<LintingIssue> {
    let incompatible = INCOMPATIBLE_PRODUCTS.iter().any(|(platform, products)| {
        *platform == target.platform && products.contains(&target.product)
    });
    if !incompatible {
        return None;
    }
    Some(LintingIssue::error(format!(
        "'{}' for platform '{}' can't have a product type '{}'",
        target.name, target.platform, target.product
    )))
}

fn lint_bundle_identifier(target: &Target) -> Option<LintingIssue> {
    let stripped = BRACE_INTERPOLATION.replace_all(&target.bundle_id, "");
    let stripped = PAREN_INTERPOLATION.replace_all(&stripped, "");
    let valid = stripped
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    if valid {
        return None;
    }
    Some(LintingIssue::error(format!(
        "Invalid bundle identifier '{}'. This string must be a uniform type identifier (UTI) that contains only alphanumeric (A-Z,a-z,0-9), hyphen (-), and period (.) characters.",
        target.bundle_id
    )))
}

fn lint_has_sources(target: &Target) -> Option<LintingIssue> {
    if !target.supports_sources() && !target.sources.is_empty() {
        Some(LintingIssue::error(format!(
            "Target {} cannot contain sources. {} {} targets are not allowed to contain source files",
            target.name, target.platform, target.product
        )))
    } else if target.supports_sources() && target.sources.is_empty() {
        Some(LintingIssue::warning(format!(
            "The target {} doesn't contain source files.",
            target.name
        )))
    } else {
        None
    }
}

fn lint_copied_files(target: &Target, fs: &dyn FileExistence) -> Vec<LintingIssue> {
    let mut issues = Vec::new();

    for resource in &target.resources {
        let path = resource.path();
        let is_info_plist = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().contains("Info.plist"));
        if is_info_plist {
            issues.push(LintingIssue::warning(format!(
                "Info.plist at path {} being copied into the target {} product.",
                path.display(),
                target.name
            )));
        }
    }

    for resource in &target.resources {
        let path = resource.path();
        if path.extension().is_some_and(|ext| ext == "entitlements") {
            issues.push(LintingIssue::warning(format!(
                "Entitlements file at path {} being copied into the target {} product.",
                path.display(),
                target.name
            )));
        }
    }

    issues.extend(lint_info_plist_exists(target, fs));
    issues.extend(lint_entitlements_exist(target, fs));
    issues
}

fn lint_library_has_no_resources(target: &Target) -> Option<LintingIssue> {
    if !target.product.is_library() || target.resources.is_empty() {
        return None;
    }
    Some(LintingIssue::error(format!(
        "Target {} cannot contain resources. {} targets don't support resources",
        target.name, target.product
    )))
}

fn lint_deployment_target(target: &Target) -> Option<LintingIssue> {
    let deployment_target = target.deployment_target.as_ref()?;
    if DEPLOYMENT_TARGET_VERSION.is_match(deployment_target.version()) {
        return None;
    }
    Some(LintingIssue::error("The version of deployment target is incorrect"))
}

fn lint_duplicate_dependencies(target: &Target) -> Vec<LintingIssue> {
    let mut counts: HashMap<&Dependency, usize> = HashMap::new();
    for dependency in &target.dependencies {
        *counts.entry(dependency).or_default() += 1;
    }

    let mut reported = HashSet::new();
    target
        .dependencies
        .iter()
        .filter(|dependency| counts[dependency] > 1 && reported.insert(*dependency))
        .map(|dependency| {
            LintingIssue::warning(format!(
                "Target '{}' has duplicate {} dependency specified: '{}'",
                target.name,
                dependency.type_name(),
                dependency.name()
            ))
        })
        .collect()
}

fn lint_core_data_models_exist(target: &Target, fs: &dyn FileExistence) -> Vec<LintingIssue> {
    target
        .core_data_models
        .iter()
        .filter(|model| !fs.exists(&model.path))
        .map(|model| {
            LintingIssue::error(format!(
                "The Core Data model at path {} does not exist",
                model.path.display()
            ))
        })
        .collect()
}

fn lint_core_data_models_current_version_exists(
    target: &Target,
    fs: &dyn FileExistence,
) -> Vec<LintingIssue> {
    target
        .core_data_models
        .iter()
        .filter_map(|model| {
            let version_path = model.current_version_path();
            if fs.exists(&version_path) {
                return None;
            }
            Some(LintingIssue::error(format!(
                "The default version of the Core Data model at path {}, {}, does not exist. There should be a file at {}",
                model.path.display(),
                model.current_version,
                version_path.display()
            )))
        })
        .collect()
}

fn lint_info_plist_exists(target: &Target, fs: &dyn FileExistence) -> Option<LintingIssue> {
    let path = target.info_plist.as_ref()?.path()?;
    if fs.exists(path) {
        return None;
    }
    Some(LintingIssue::error(format!(
        "Info.plist file not found at path {}",
        path.display()
    )))
}

fn lint_entitlements_exist(target: &Target, fs: &dyn FileExistence) -> Option<LintingIssue> {
    let path = target.entitlements.as_ref()?;
    if fs.exists(path) {
        return None;
    }
    Some(LintingIssue::error(format!(
        "Entitlements file not found at path {}",
        path.display()
    )))
}
