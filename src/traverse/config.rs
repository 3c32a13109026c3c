//! Configuration types for path traversal

use serde::{Deserialize, Serialize};

use super::policy::{
    SiblingOrder, SymlinkCyclePolicy, TraversePathDepthPolicy, UnreadableDirPolicy,
};

/// Configuration for one traversal request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraverseConfig {
    pub depth_policy: TraversePathDepthPolicy,
    pub sibling_order: SiblingOrder,
    /// Descend into symlinked directories (with ancestor cycle checks).
    pub follow_links: bool,
    /// Directories at this depth are yielded but not listed. Root is depth 0.
    pub max_depth: Option<usize>,
    /// Include entries whose name starts with `.`
    pub include_hidden: bool,
    /// Glob patterns matched against entry names; matches are skipped entirely.
    pub ignore_patterns: Vec<String>,
    pub on_unreadable: UnreadableDirPolicy,
    pub on_cycle: SymlinkCyclePolicy,
}

impl TraverseConfig {
    /// Default configuration with the given depth policy.
    pub fn with_policy(depth_policy: TraversePathDepthPolicy) -> Self {
        Self {
            depth_policy,
            ..Self::default()
        }
    }
}

impl Default for TraverseConfig {
    fn default() -> Self {
        Self {
            depth_policy: TraversePathDepthPolicy::PreOrder,
            sibling_order: SiblingOrder::ByName,
            follow_links: false,
            max_depth: None,
            include_hidden: true,
            ignore_patterns: Vec::new(),
            on_unreadable: UnreadableDirPolicy::Fail,
            on_cycle: SymlinkCyclePolicy::Prune,
        }
    }
}
