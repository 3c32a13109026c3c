//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes one path per line
//! as entries arrive, for use with `write_traversal`.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::traverse::{EntryKind, TraversePathEntry};

use super::config::OutputConfig;
use super::{EntryOutput, display_path};

/// Streaming output formatter - writes directly without buffering.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn color_for(kind: EntryKind) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match kind {
            EntryKind::Directory => {
                spec.set_fg(Some(Color::Blue)).set_bold(true);
            }
            EntryKind::Symlink => {
                spec.set_fg(Some(Color::Cyan));
            }
            EntryKind::Other => {
                spec.set_fg(Some(Color::Yellow));
            }
            EntryKind::File => {
                spec.set_fg(Some(Color::White));
            }
        }
        spec
    }
}

impl<W: WriteColor> EntryOutput for StreamingFormatter<W> {
    fn output_entry(&mut self, entry: &TraversePathEntry) -> io::Result<()> {
        let shown = display_path(entry.path(), self.config.relative_to.as_deref());

        self.out.set_color(&Self::color_for(entry.kind()))?;
        write!(self.out, "{}", shown.display())?;
        self.out.reset()?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        if self.config.show_summary {
            writeln!(self.out)?;
            writeln!(self.out, "{} directories, {} files", dir_count, file_count)?;
        }
        self.out.flush()
    }
}
