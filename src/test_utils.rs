//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests, benchmarks, and the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// A small two-level tree: `x.txt` and `sub/y.txt`.
    pub fn sample() -> Self {
        let tree = Self::new();
        tree.add_file("x.txt", "x");
        tree.add_file("sub/y.txt", "y");
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a relative entry.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing to `target` (used verbatim).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: impl AsRef<Path>, link: &str) -> PathBuf {
        let link_path = self.join(link);
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Change the permission bits of an entry.
    #[cfg(unix)]
    pub fn set_mode(&self, path: &str, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(self.join(path), fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }

    /// Make a directory unlistable. Returns `None` when the current user can
    /// still list it (e.g. running as root), in which case the caller should
    /// skip permission-based assertions. Permissions are restored on drop of
    /// the returned guard.
    #[cfg(unix)]
    pub fn lock_dir(&self, path: &str) -> Option<LockedDir> {
        self.set_mode(path, 0o000);
        let guard = LockedDir {
            path: self.join(path),
        };
        if fs::read_dir(&guard.path).is_ok() {
            return None;
        }
        Some(guard)
    }

    /// Relative paths (with `/` separators) of traversal output, for readable assertions.
    pub fn relative(&self, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| {
                let rel = p.strip_prefix(self.path()).unwrap_or(p);
                if rel.as_os_str().is_empty() {
                    ".".to_string()
                } else {
                    rel.to_string_lossy().replace('\\', "/")
                }
            })
            .collect()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores `0o755` on a locked directory so the tree can be cleaned up.
#[cfg(unix)]
pub struct LockedDir {
    path: PathBuf,
}

#[cfg(unix)]
impl Drop for LockedDir {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755));
    }
}
