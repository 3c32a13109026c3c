//! Lazy directory traversal
//!
//! This module walks a directory tree one pull at a time:
//!
//! - `TraversePathIterable`: an immutable, restartable traversal request
//! - `TraversePathIter`: the per-iteration cursor, O(depth) memory
//! - `TraversePathFactory`: stateless constructor indirection
//!
//! Where a directory appears relative to its contents, and which entries
//! appear at all, is decided by a [`TraversePathDepthPolicy`]. Siblings are
//! visited in [`SiblingOrder`], by name unless configured otherwise.

mod config;
mod cursor;
mod entry;
mod factory;
mod identity;
mod iterable;
mod policy;

pub use config::TraverseConfig;
pub use cursor::{CursorState, TraversePathIter};
pub use entry::{EntryKind, TraversePathEntry};
pub use factory::TraversePathFactory;
pub use identity::DirIdentity;
pub use iterable::TraversePathIterable;
pub use policy::{SiblingOrder, SymlinkCyclePolicy, TraversePathDepthPolicy, UnreadableDirPolicy};
