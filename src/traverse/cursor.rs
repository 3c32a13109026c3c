//! The per-iteration traversal cursor.
//!
//! A cursor keeps a stack of frames, one per directory currently being
//! expanded. Each frame owns the sorted listing of its directory, so memory
//! stays O(depth × branching). Each internal step lists at most one
//! directory: it is opened, read in full, and closed inside that step, and no
//! handle survives between calls to `next()`. A single `next()` may run
//! several steps when the policy withholds directories (`FilesOnly`,
//! `PostOrder`, `LeavesOnly`).

use std::ffi::OsString;
use std::fs;
use std::io;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::vec;

use tracing::{debug, trace, warn};

use crate::error::TraverseError;
use crate::path_utils::NameFilter;

use super::config::TraverseConfig;
use super::entry::{EntryKind, TraversePathEntry};
use super::identity::DirIdentity;
use super::policy::{SymlinkCyclePolicy, UnreadableDirPolicy};

/// Lifecycle of a cursor. `Exhausted` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    NotStarted,
    Walking,
    Exhausted,
    Failed,
}

/// A listed directory entry waiting to be visited.
#[derive(Debug)]
struct Child {
    name: OsString,
    path: PathBuf,
    kind: EntryKind,
    /// Reached through a followed symlink.
    via_link: bool,
}

/// A directory being expanded.
#[derive(Debug)]
struct Frame {
    path: PathBuf,
    depth: usize,
    identity: Option<DirIdentity>,
    children: vec::IntoIter<Child>,
    /// Whether any child was yielded or descended.
    contributed: bool,
}

/// Outcome of visiting one entry.
enum Step {
    Yield(TraversePathEntry),
    Continue,
    Fail(TraverseError),
}

/// Lazy cursor over one traversal. Created by
/// [`TraversePathIterable::iter`](super::TraversePathIterable::iter).
#[derive(Debug)]
pub struct TraversePathIter<'a> {
    root: &'a Path,
    config: &'a TraverseConfig,
    filter: &'a NameFilter,
    state: CursorState,
    stack: Vec<Frame>,
}

impl<'a> TraversePathIter<'a> {
    pub(crate) fn new(root: &'a Path, config: &'a TraverseConfig, filter: &'a NameFilter) -> Self {
        Self {
            root,
            config,
            filter,
            state: CursorState::NotStarted,
            stack: Vec::new(),
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    fn fail(&mut self, err: TraverseError) -> Option<Result<TraversePathEntry, TraverseError>> {
        debug!(error = %err, "traversal failed");
        self.stack.clear();
        self.state = CursorState::Failed;
        Some(Err(err))
    }

    fn mark_contributed(&mut self) {
        if let Some(parent) = self.stack.last_mut() {
            parent.contributed = true;
        }
    }

    /// Visit one entry: yield it, descend into it, or drop it.
    fn visit(&mut self, child: Child, depth: usize) -> Step {
        let policy = self.config.depth_policy;

        if !child.kind.is_dir() {
            self.mark_contributed();
            return if policy.yields_files() {
                Step::Yield(TraversePathEntry::new(child.path, child.kind, depth))
            } else {
                Step::Continue
            };
        }

        let at_max_depth = self.config.max_depth.is_some_and(|max| depth >= max);
        if at_max_depth {
            self.mark_contributed();
            return if policy.yields_dirs() {
                Step::Yield(TraversePathEntry::new(child.path, EntryKind::Directory, depth))
            } else {
                Step::Continue
            };
        }

        let (identity, children) = match self.identify(&child.path) {
            Ok(identity) => {
                if child.via_link
                    && let Some(ancestor) = self.find_ancestor(identity.as_ref())
                {
                    return match self.config.on_cycle {
                        SymlinkCyclePolicy::Prune => {
                            warn!(
                                path = %child.path.display(),
                                ancestor = %ancestor.display(),
                                "pruning symlink cycle"
                            );
                            Step::Continue
                        }
                        SymlinkCyclePolicy::Fail => Step::Fail(TraverseError::CycleDetected {
                            path: child.path,
                            ancestor,
                        }),
                    };
                }
                match self.read_children(&child.path) {
                    Ok(children) => (identity, children),
                    Err(source) => match self.skip_unreadable(&child.path, source) {
                        Ok(()) => (identity, Vec::new()),
                        Err(err) => return Step::Fail(err),
                    },
                }
            }
            Err(source) => match self.skip_unreadable(&child.path, source) {
                Ok(()) => (None, Vec::new()),
                Err(err) => return Step::Fail(err),
            },
        };

        self.mark_contributed();
        let entry = TraversePathEntry::new(child.path.clone(), EntryKind::Directory, depth);
        self.stack.push(Frame {
            path: child.path,
            depth,
            identity,
            children: children.into_iter(),
            contributed: false,
        });

        if policy.yields_dir_before_children() {
            Step::Yield(entry)
        } else {
            Step::Continue
        }
    }

    /// Called when a frame has no children left.
    fn leave(&self, frame: Frame) -> Option<TraversePathEntry> {
        let policy = self.config.depth_policy;
        let yield_now = policy.yields_dir_after_children()
            || (policy.yields_leaf_dirs() && !frame.contributed);
        yield_now.then(|| TraversePathEntry::new(frame.path, EntryKind::Directory, frame.depth))
    }

    /// Path of the directory on the stack sharing `identity`, if any.
    fn find_ancestor(&self, identity: Option<&DirIdentity>) -> Option<PathBuf> {
        let identity = identity?;
        self.stack
            .iter()
            .find(|frame| frame.identity.as_ref() == Some(identity))
            .map(|frame| frame.path.clone())
    }

    /// Apply the unreadable-directory policy to a failed listing.
    fn skip_unreadable(&self, path: &Path, source: io::Error) -> Result<(), TraverseError> {
        match self.config.on_unreadable {
            UnreadableDirPolicy::Fail => Err(TraverseError::unreadable(path, source)),
            UnreadableDirPolicy::Skip => {
                warn!(path = %path.display(), error = %source, "skipping unreadable directory");
                Ok(())
            }
        }
    }

    /// Directory identity, only tracked when links are followed.
    fn identify(&self, path: &Path) -> io::Result<Option<DirIdentity>> {
        if self.config.follow_links {
            DirIdentity::of(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Read, filter, classify, and sort the entries of one directory.
    fn read_children(&self, dir: &Path) -> io::Result<Vec<Child>> {
        let mut children = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if self.filter.should_skip(&name.to_string_lossy()) {
                continue;
            }
            let path = entry.path();
            let (kind, via_link) = classify(&entry, &path, self.config.follow_links);
            children.push(Child {
                name,
                path,
                kind,
                via_link,
            });
        }

        let order = self.config.sibling_order;
        children.sort_by(|a, b| {
            order.compare(
                (a.name.as_os_str(), a.kind.is_dir()),
                (b.name.as_os_str(), b.kind.is_dir()),
            )
        });

        debug!(path = %dir.display(), entries = children.len(), "expanded directory");
        Ok(children)
    }
}

/// Decide the entry kind, resolving symlinks only when they are followed.
fn classify(entry: &fs::DirEntry, path: &Path, follow_links: bool) -> (EntryKind, bool) {
    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(_) => return (EntryKind::Other, false),
    };

    if file_type.is_symlink() && follow_links {
        return match fs::metadata(path) {
            Ok(meta) => (EntryKind::from_file_type(meta.file_type()), true),
            // Dangling
            Err(_) => (EntryKind::Symlink, false),
        };
    }

    (EntryKind::from_file_type(file_type), false)
}

impl Iterator for TraversePathIter<'_> {
    type Item = Result<TraversePathEntry, TraverseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            CursorState::Exhausted | CursorState::Failed => return None,
            CursorState::NotStarted => {
                self.state = CursorState::Walking;
                let root = Child {
                    name: OsString::new(),
                    path: self.root.to_path_buf(),
                    kind: EntryKind::Directory,
                    via_link: false,
                };
                match self.visit(root, 0) {
                    Step::Yield(entry) => return Some(Ok(entry)),
                    Step::Fail(err) => return self.fail(err),
                    Step::Continue => {}
                }
            }
            CursorState::Walking => {}
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                trace!(root = %self.root.display(), "traversal exhausted");
                self.state = CursorState::Exhausted;
                return None;
            };

            match frame.children.next() {
                Some(child) => {
                    let depth = frame.depth + 1;
                    match self.visit(child, depth) {
                        Step::Yield(entry) => return Some(Ok(entry)),
                        Step::Fail(err) => return self.fail(err),
                        Step::Continue => {}
                    }
                }
                None => {
                    if let Some(frame) = self.stack.pop()
                        && let Some(entry) = self.leave(frame)
                    {
                        return Some(Ok(entry));
                    }
                }
            }
        }
    }
}

impl FusedIterator for TraversePathIter<'_> {}
