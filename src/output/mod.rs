//! Traversal output formatting
//!
//! Formatters receive entries one at a time as the cursor yields them, so
//! nothing is buffered beyond the current line.
//!
//! - `config` - Output configuration types
//! - `streaming` - Plain, optionally colored, one path per line
//! - `json` - One JSON object per line

mod config;
mod json;
mod streaming;

use std::io;
use std::path::{Path, PathBuf};

use crate::traverse::{EntryKind, TraversePathEntry, TraversePathIterable};
use crate::error::TraverseError;

pub use config::OutputConfig;
pub use json::JsonLinesFormatter;
pub use streaming::StreamingFormatter;

/// Sink for traversal entries.
pub trait EntryOutput {
    fn output_entry(&mut self, entry: &TraversePathEntry) -> io::Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()>;
}

/// Errors raised while streaming a traversal to an output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error(transparent)]
    Traverse(#[from] TraverseError),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

/// Drive a traversal into an output. Returns (dir_count, file_count).
pub fn write_traversal<O: EntryOutput>(
    walk: &TraversePathIterable,
    output: &mut O,
) -> Result<(usize, usize), OutputError> {
    let mut dir_count = 0usize;
    let mut file_count = 0usize;

    for entry in walk {
        let entry = entry?;
        match entry.kind() {
            EntryKind::Directory => dir_count += 1,
            _ => file_count += 1,
        }
        output.output_entry(&entry)?;
    }

    output.finish(dir_count, file_count)?;
    Ok((dir_count, file_count))
}

/// Path to display for an entry, relative to `base` when given.
pub(crate) fn display_path(path: &Path, base: Option<&Path>) -> PathBuf {
    match base.and_then(|b| path.strip_prefix(b).ok()) {
        Some(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Some(rel) => rel.to_path_buf(),
        None => path.to_path_buf(),
    }
}
