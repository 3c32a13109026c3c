//! Directory identity for symlink cycle detection.

use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Identifies a directory independently of the path used to reach it.
///
/// On Unix this is the (device, inode) pair; elsewhere the canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirIdentity {
    Inode { device: u64, inode: u64 },
    Canonical(PathBuf),
}

impl DirIdentity {
    /// Identity of `path`, following symlinks.
    #[cfg(unix)]
    pub fn of(path: &Path) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        Ok(DirIdentity::Inode {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }

    /// Identity of `path`, following symlinks.
    #[cfg(not(unix))]
    pub fn of(path: &Path) -> io::Result<Self> {
        path.canonicalize().map(DirIdentity::Canonical)
    }
}
