//! targetlint Core Library
//!
//! This crate lints build targets before project generation:
//! - Target model and manifest loading
//! - Per-target linting rules
//! - Default settings and build phase action linters
//! - File existence checks behind a trait
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│   Target    │────▶│   Linting   │
//! │   (YAML)    │     │   Linter    │     │   Issues    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!              settings, actions, file existence
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use targetlint_core::{LocalFileSystem, Manifest, TargetLinter};
//!
//! let manifest = Manifest::load("./target.yaml")?;
//! let linter = TargetLinter::with_defaults(LocalFileSystem);
//! for target in &manifest.targets {
//!     for issue in linter.lint(target, &LocalFileSystem) {
//!         println!("{}: {}", target.name, issue);
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod dependency;
pub mod error;
pub mod fs;
pub mod issue;
pub mod linter;
pub mod manifest;
pub mod settings;
pub mod target;

pub use error::{Error, Result};
pub use fs::{FileExistence, LocalFileSystem};
#[cfg(any(test, feature = "testing"))]
pub use fs::InMemoryFileSystem;
pub use issue::{LintingIssue, Severity};
pub use linter::{
    ActionLinter, DefaultActionLinter, DefaultSettingsLinter, SettingsLinter, TargetLinter,
};
pub use manifest::Manifest;
pub use target::{Platform, Product, Target};
