//! JSON lines output formatting

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::traverse::{EntryKind, TraversePathEntry};

use super::config::OutputConfig;
use super::{EntryOutput, display_path};

#[derive(Serialize)]
struct JsonEntry {
    path: PathBuf,
    kind: EntryKind,
    depth: usize,
}

/// Writes one JSON object per entry, one per line.
pub struct JsonLinesFormatter<W: Write = io::Stdout> {
    config: OutputConfig,
    out: W,
}

impl JsonLinesFormatter<io::Stdout> {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            out: io::stdout(),
        }
    }
}

impl<W: Write> JsonLinesFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::other)?;
        writeln!(self.out)
    }
}

impl<W: Write> EntryOutput for JsonLinesFormatter<W> {
    fn output_entry(&mut self, entry: &TraversePathEntry) -> io::Result<()> {
        let json = JsonEntry {
            path: display_path(entry.path(), self.config.relative_to.as_deref()),
            kind: entry.kind(),
            depth: entry.depth(),
        };
        self.write_line(&json)
    }

    /// No summary line: every line describes an entry.
    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> io::Result<()> {
        self.out.flush()
    }
}
