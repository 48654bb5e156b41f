//! targetlint CLI
//!
//! Lints build targets described in a YAML manifest.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::lint::OutputFormat;

/// targetlint - catch broken build targets before generating projects
#[derive(Parser)]
#[command(name = "targetlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Manifest file, or a directory containing target.yaml
    #[arg(short, long, default_value = "target.yaml", env = "TARGETLINT_MANIFEST")]
    manifest: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint the targets in the manifest
    Lint {
        /// Lint a specific target only
        #[arg(short, long)]
        target: Option<String>,

        /// Fail on warnings as well as errors
        #[arg(long)]
        warnings_as_errors: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the targets in the manifest
    Targets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Lint {
            target,
            warnings_as_errors,
            format,
        } => {
            commands::lint::run(&cli.manifest, target.as_deref(), warnings_as_errors, format)?;
        }
        Commands::Targets => {
            commands::targets::run(&cli.manifest)?;
        }
    }

    Ok(())
}
