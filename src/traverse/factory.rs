//! Stateless constructor indirection for [`TraversePathIterable`].

use std::path::Path;

use crate::error::TraverseError;

use super::config::TraverseConfig;
use super::iterable::TraversePathIterable;
use super::policy::TraversePathDepthPolicy;

/// Builds traversals. Holds no state; useful where callers want to inject
/// the construction step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraversePathFactory;

impl TraversePathFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn new_traverse_path_iterable(
        &self,
        root: impl AsRef<Path>,
        depth_policy: TraversePathDepthPolicy,
    ) -> Result<TraversePathIterable, TraverseError> {
        TraversePathIterable::new(root, depth_policy)
    }

    pub fn new_traverse_path_iterable_with_config(
        &self,
        root: impl AsRef<Path>,
        config: TraverseConfig,
    ) -> Result<TraversePathIterable, TraverseError> {
        TraversePathIterable::with_config(root, config)
    }
}
