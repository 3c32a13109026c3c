//! Papaya - lazy, restartable directory traversal with depth policies

pub mod error;
pub mod output;
pub mod path_utils;
pub mod traverse;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{InvalidRootReason, TraverseError, TraverseErrorKind};
pub use output::{
    EntryOutput, JsonLinesFormatter, OutputConfig, OutputError, StreamingFormatter, write_traversal,
};
pub use traverse::{
    CursorState, EntryKind, SiblingOrder, SymlinkCyclePolicy, TraverseConfig, TraversePathDepthPolicy,
    TraversePathEntry, TraversePathFactory, TraversePathIter, TraversePathIterable,
    UnreadableDirPolicy,
};
