//! Items yielded by a traversal cursor.

use std::fs::FileType;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What kind of filesystem object an entry is, as seen by the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
    /// A symlink that was not descended (not followed, or dangling).
    Symlink,
    /// Sockets, fifos, devices.
    Other,
}

impl EntryKind {
    pub(crate) fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }

    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// A path yielded by a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversePathEntry {
    path: PathBuf,
    kind: EntryKind,
    depth: usize,
}

impl TraversePathEntry {
    pub(crate) fn new(path: PathBuf, kind: EntryKind, depth: usize) -> Self {
        Self { path, kind, depth }
    }

    /// Absolute path of the entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Distance from the traversal root (the root itself is 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
