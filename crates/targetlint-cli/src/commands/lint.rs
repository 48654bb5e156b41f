//! Lint command

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde_json::json;
use targetlint_core::{LintingIssue, LocalFileSystem, Manifest, Severity, Target, TargetLinter};

/// How issues are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per issue
    Text,
    /// A JSON array of issues
    Json,
}

/// Run the lint command
pub fn run(
    manifest_path: &str,
    target_name: Option<&str>,
    warnings_as_errors: bool,
    format: OutputFormat,
) -> Result<()> {
    tracing::info!("Linting manifest: {}", manifest_path);

    let manifest = Manifest::load(manifest_path).context("Failed to load manifest")?;
    let targets: Vec<&Target> = match target_name {
        Some(name) => vec![
            manifest
                .target(name)
                .with_context(|| format!("Target '{}' not found in manifest", name))?,
        ],
        None => manifest.targets.iter().collect(),
    };

    let linter = TargetLinter::with_defaults(LocalFileSystem);
    let results: Vec<(&Target, Vec<LintingIssue>)> = targets
        .into_iter()
        .map(|target| (target, linter.lint(target, &LocalFileSystem)))
        .collect();

    match format {
        OutputFormat::Text => print_text(&results),
        OutputFormat::Json => print_json(&results)?,
    }

    let (errors, warnings) = count(&results);
    tracing::info!(
        "{} target(s) linted: {} error(s), {} warning(s)",
        results.len(),
        errors,
        warnings
    );

    if errors > 0 {
        bail!("Linting failed with {} error(s)", errors);
    }
    if warnings_as_errors && warnings > 0 {
        bail!("Linting failed with {} warning(s)", warnings);
    }
    Ok(())
}

fn print_text(results: &[(&Target, Vec<LintingIssue>)]) {
    for (target, issues) in results {
        for issue in issues {
            println!("{}: {}", target.name, issue);
        }
    }
}

fn print_json(results: &[(&Target, Vec<LintingIssue>)]) -> Result<()> {
    let issues: Vec<serde_json::Value> = results
        .iter()
        .flat_map(|(target, issues)| {
            issues.iter().map(move |issue| {
                json!({
                    "target": target.name,
                    "severity": issue.severity,
                    "reason": issue.reason,
                })
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&issues)?);
    Ok(())
}

fn count(results: &[(&Target, Vec<LintingIssue>)]) -> (usize, usize) {
    let issues = results.iter().flat_map(|(_, issues)| issues);
    issues.fold((0, 0), |(errors, warnings), issue| match issue.severity {
        Severity::Error => (errors + 1, warnings),
        Severity::Warning => (errors, warnings + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use targetlint_core::{Platform, Product};

    #[test]
    fn test_count_issues() {
        let app = Target::new("App", Platform::Ios, Product::App, "com.example.app");
        let results = vec![(
            &app,
            vec![
                LintingIssue::error("a"),
                LintingIssue::warning("b"),
                LintingIssue::warning("c"),
            ],
        )];
        assert_eq!(count(&results), (1, 2));
        assert_eq!(count(&[]), (0, 0));
    }
}
