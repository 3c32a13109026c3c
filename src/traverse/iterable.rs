//! TraversePathIterable - one restartable traversal request

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{InvalidRootReason, TraverseError};
use crate::path_utils::{NameFilter, absolute_path, check_directory};

use super::config::TraverseConfig;
use super::cursor::TraversePathIter;
use super::entry::TraversePathEntry;
use super::policy::TraversePathDepthPolicy;

/// A root directory plus the configuration to walk it with.
///
/// The iterable holds no open handles and no cursor state. Every call to
/// [`iter`](Self::iter) starts an independent traversal from scratch, so the
/// same value can be walked repeatedly, or by several threads at once.
///
/// ```no_run
/// use papaya::{TraversePathDepthPolicy, TraversePathIterable};
///
/// let walk = TraversePathIterable::new("/tmp/a", TraversePathDepthPolicy::PreOrder)?;
/// for entry in &walk {
///     println!("{}", entry?.path().display());
/// }
/// # Ok::<(), papaya::TraverseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TraversePathIterable {
    root: PathBuf,
    config: TraverseConfig,
    filter: NameFilter,
}

impl TraversePathIterable {
    /// Walk `root` with the default configuration and the given depth policy.
    pub fn new(
        root: impl AsRef<Path>,
        depth_policy: TraversePathDepthPolicy,
    ) -> Result<Self, TraverseError> {
        Self::with_config(root, TraverseConfig::with_policy(depth_policy))
    }

    /// Walk `root` with a full configuration.
    ///
    /// Fails with [`TraverseError::InvalidRoot`] unless `root` is an existing
    /// directory, and with [`TraverseError::InvalidPattern`] if an ignore
    /// pattern does not compile.
    pub fn with_config(root: impl AsRef<Path>, config: TraverseConfig) -> Result<Self, TraverseError> {
        let root = root.as_ref();
        let root = absolute_path(root)
            .map_err(|_| TraverseError::invalid_root(root, InvalidRootReason::DoesNotExist))?;
        check_directory(&root)?;
        let filter = NameFilter::new(config.include_hidden, &config.ignore_patterns)?;

        debug!(root = %root.display(), policy = ?config.depth_policy, "created traversal");
        Ok(Self {
            root,
            config,
            filter,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &TraverseConfig {
        &self.config
    }

    pub fn depth_policy(&self) -> TraversePathDepthPolicy {
        self.config.depth_policy
    }

    /// Start a fresh traversal.
    pub fn iter(&self) -> TraversePathIter<'_> {
        TraversePathIter::new(&self.root, &self.config, &self.filter)
    }

    /// Start a fresh traversal yielding bare paths.
    pub fn paths(&self) -> impl Iterator<Item = Result<PathBuf, TraverseError>> + '_ {
        self.iter().map(|entry| entry.map(TraversePathEntry::into_path))
    }

    /// Walk the whole tree, stopping at the first error.
    pub fn collect_paths(&self) -> Result<Vec<PathBuf>, TraverseError> {
        self.paths().collect()
    }
}

impl<'a> IntoIterator for &'a TraversePathIterable {
    type Item = Result<TraversePathEntry, TraverseError>;
    type IntoIter = TraversePathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
