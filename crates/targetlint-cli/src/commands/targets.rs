//! List targets command

use anyhow::{Context, Result};
use targetlint_core::Manifest;

/// Run the targets command
pub fn run(manifest_path: &str) -> Result<()> {
    let manifest = Manifest::load(manifest_path).context("Failed to load manifest")?;

    for target in &manifest.targets {
        println!("{} ({} {})", target.name, target.platform, target.product);
    }
    Ok(())
}
