//! Shared path helpers: root validation and name-based skipping.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{InvalidRootReason, TraverseError};

/// Make `path` absolute against the current directory without resolving symlinks.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        std::path::absolute(path)
    }
}

/// Check that `path` exists and is a directory (following symlinks).
pub fn check_directory(path: &Path) -> Result<(), TraverseError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(TraverseError::invalid_root(
            path,
            InvalidRootReason::NotADirectory,
        )),
        Err(err) => Err(TraverseError::invalid_root(path, root_reason(&err))),
    }
}

/// Classify a failed root lookup.
fn root_reason(err: &io::Error) -> InvalidRootReason {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => InvalidRootReason::DoesNotExist,
        _ => InvalidRootReason::Inaccessible,
    }
}

/// Whether a name denotes a hidden entry.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// Pre-compiled name filter applied to every entry below the root.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    include_hidden: bool,
    patterns: Vec<(String, Pattern)>,
}

impl NameFilter {
    /// Compile the ignore patterns, failing on the first invalid one.
    pub fn new(include_hidden: bool, ignore_patterns: &[String]) -> Result<Self, TraverseError> {
        let patterns = ignore_patterns
            .iter()
            .map(|raw| {
                Pattern::new(raw)
                    .map(|p| (raw.clone(), p))
                    .map_err(|e| TraverseError::InvalidPattern {
                        pattern: raw.clone(),
                        message: e.msg.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            include_hidden,
            patterns,
        })
    }

    /// Check if an entry with this name should be skipped entirely.
    pub fn should_skip(&self, name: &str) -> bool {
        if !self.include_hidden && is_hidden_name(name) {
            return true;
        }
        self.patterns
            .iter()
            .any(|(raw, pattern)| name == raw || pattern.matches(name))
    }
}
