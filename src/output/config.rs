//! Output configuration types

use std::path::PathBuf;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print paths relative to this directory instead of absolute.
    pub relative_to: Option<PathBuf>,
    /// Print the "N directories, M files" line after the listing.
    pub show_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            relative_to: None,
            show_summary: true,
        }
    }
}
