//! Path resolution for user-supplied target strings.

use crate::core::error::DefenderResult;

use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Resolves user-supplied path strings before they become tool arguments.
///
/// The facade resolves every scan target, exclusion path, and restore
/// destination to an absolute path; `exists` decides whether a restore
/// target names a file on disk or a threat name.
pub trait PathResolver: Send + Sync + Debug {
    /// Resolves `path` to an absolute filesystem path.
    fn resolve(&self, path: &str) -> DefenderResult<PathBuf>;

    /// Returns `true` if `path` exists on disk.
    fn exists(&self, path: &Path) -> bool;
}

/// Resolver backed by the real filesystem and working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPaths;

impl SystemPaths {
    /// Creates a new system path resolver.
    pub fn new() -> Self {
        Self
    }
}

impl PathResolver for SystemPaths {
    fn resolve(&self, path: &str) -> DefenderResult<PathBuf> {
        Ok(std::path::absolute(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_makes_relative_paths_absolute() {
        let resolver = SystemPaths::new();
        let resolved = resolver.resolve("some/relative/target").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/relative/target"));
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let resolver = SystemPaths::new();
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolver.resolve(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn test_exists() {
        let resolver = SystemPaths::new();
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(resolver.exists(file.path()));
        assert!(!resolver.exists(Path::new("/definitely/not/here")));
    }
}
