//! Error types for targetlint-core
//!
//! Linting itself never fails; these errors come from loading manifests.

use thiserror::Error;

/// Result type alias for targetlint-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in targetlint-core
#[derive(Error, Debug)]
pub enum Error {
    /// Manifest file could not be found
    #[error("manifest not found: {path}")]
    ManifestNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML manifest
    #[error("failed to parse manifest: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    /// Manifest parsed but its content is unusable
    #[error("invalid manifest: {message}")]
    ManifestInvalid {
        /// Description of what's invalid
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
