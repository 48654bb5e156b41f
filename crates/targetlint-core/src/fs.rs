//! File existence checks
//!
//! Linters never touch the filesystem directly; they ask a [`FileExistence`]
//! implementation. [`LocalFileSystem`] answers from disk; with the `testing`
//! feature, `InMemoryFileSystem` answers from a fixed set of paths.

use std::path::Path;
#[cfg(any(test, feature = "testing"))]
use std::{collections::HashSet, path::PathBuf};

/// Answers whether a path exists
pub trait FileExistence {
    /// Whether `path` exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileExistence + ?Sized> FileExistence for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<T: FileExistence + ?Sized> FileExistence for Box<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Checks paths against the local filesystem.
///
/// A path whose existence can't be confirmed (permission denied, broken
/// symlink, other I/O errors) is reported as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileExistence for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        match path.try_exists() {
            Ok(exists) => exists,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "treating path as missing");
                false
            }
        }
    }
}

/// A fixed set of paths that exist, everything else is missing
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileSystem {
    paths: HashSet<PathBuf>,
}

#[cfg(any(test, feature = "testing"))]
impl InMemoryFileSystem {
    /// Create an empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as existing
    pub fn insert(&mut self, path: impl Into<PathBuf>) {
        self.paths.insert(path.into());
    }

    /// Builder form of [`InMemoryFileSystem::insert`]
    pub fn with(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path);
        self
    }
}

#[cfg(any(test, feature = "testing"))]
impl<P: Into<PathBuf>> FromIterator<P> for InMemoryFileSystem {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl FileExistence for InMemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}
