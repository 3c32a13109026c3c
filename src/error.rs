//! Error types for traversal operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a root path was rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidRootReason {
    /// Nothing exists at the path (or a dangling symlink).
    DoesNotExist,
    /// The path exists but is not a directory.
    NotADirectory,
    /// The path could not be inspected, e.g. a parent denies search permission.
    Inaccessible,
}

impl fmt::Display for InvalidRootReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRootReason::DoesNotExist => write!(f, "does not exist"),
            InvalidRootReason::NotADirectory => write!(f, "not a directory"),
            InvalidRootReason::Inaccessible => write!(f, "not accessible"),
        }
    }
}

/// Errors that can occur while constructing or iterating a traversal.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// Root path does not exist, is not a directory, or cannot be inspected.
    #[error("Invalid root path ({reason}): {}", path.display())]
    InvalidRoot {
        path: PathBuf,
        reason: InvalidRootReason,
    },

    /// An ignore pattern failed to compile.
    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A directory could not be listed during iteration.
    #[error("Directory unreadable: {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Following a symbolic link would revisit an ancestor directory.
    #[error("Symbolic link cycle detected: {} -> {}", path.display(), ancestor.display())]
    CycleDetected { path: PathBuf, ancestor: PathBuf },
}

/// Reason code for a [`TraverseError`], suitable for branching or logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraverseErrorKind {
    InvalidRoot,
    InvalidPattern,
    DirectoryUnreadable,
    CycleDetected,
}

impl TraverseError {
    /// Reject a root path.
    pub fn invalid_root(path: impl Into<PathBuf>, reason: InvalidRootReason) -> Self {
        Self::InvalidRoot {
            path: path.into(),
            reason,
        }
    }

    /// Wrap a failed directory listing.
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    /// The reason code of this error.
    pub fn kind(&self) -> TraverseErrorKind {
        match self {
            Self::InvalidRoot { .. } => TraverseErrorKind::InvalidRoot,
            Self::InvalidPattern { .. } => TraverseErrorKind::InvalidPattern,
            Self::DirectoryUnreadable { .. } => TraverseErrorKind::DirectoryUnreadable,
            Self::CycleDetected { .. } => TraverseErrorKind::CycleDetected,
        }
    }

    /// The offending path, if the error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidRoot { path, .. }
            | Self::DirectoryUnreadable { path, .. }
            | Self::CycleDetected { path, .. } => Some(path),
            Self::InvalidPattern { .. } => None,
        }
    }

    /// The underlying I/O error kind for unreadable directories.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::DirectoryUnreadable { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
