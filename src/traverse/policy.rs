//! Closed policy enums that steer a traversal.

use std::cmp::Ordering;
use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

/// Where directories appear relative to their children, and which entries are yielded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversePathDepthPolicy {
    /// Every directory before its descendants.
    #[default]
    PreOrder,
    /// Every directory after all of its descendants.
    PostOrder,
    /// Only non-directory entries.
    FilesOnly,
    /// Only directories, in pre-order.
    DirsOnly,
    /// Only leaves of the traversed tree: non-directories, and directories
    /// that contribute no children.
    LeavesOnly,
}

impl TraversePathDepthPolicy {
    pub const ALL: [TraversePathDepthPolicy; 5] = [
        Self::PreOrder,
        Self::PostOrder,
        Self::FilesOnly,
        Self::DirsOnly,
        Self::LeavesOnly,
    ];

    /// Directories are yielded when they are expanded.
    pub fn yields_dir_before_children(self) -> bool {
        matches!(self, Self::PreOrder | Self::DirsOnly)
    }

    /// Directories are yielded once their children are exhausted.
    pub fn yields_dir_after_children(self) -> bool {
        matches!(self, Self::PostOrder)
    }

    /// Non-directory entries are yielded.
    pub fn yields_files(self) -> bool {
        !matches!(self, Self::DirsOnly)
    }

    /// Directories without traversed children are yielded as leaves.
    pub fn yields_leaf_dirs(self) -> bool {
        matches!(self, Self::LeavesOnly)
    }

    /// Whether any directory path can appear in the output.
    pub fn yields_dirs(self) -> bool {
        !matches!(self, Self::FilesOnly)
    }
}

/// Order in which the entries of one directory are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiblingOrder {
    /// Ascending byte-wise file name.
    #[default]
    ByName,
    /// Descending byte-wise file name.
    ByNameDescending,
    /// Directories first, then by name.
    DirectoriesFirst,
    /// Non-directories first, then by name.
    FilesFirst,
}

impl SiblingOrder {
    /// Compare two siblings given their names and whether each is a directory.
    pub fn compare(self, a: (&OsStr, bool), b: (&OsStr, bool)) -> Ordering {
        let (a_name, a_dir) = a;
        let (b_name, b_dir) = b;
        match self {
            Self::ByName => a_name.cmp(b_name),
            Self::ByNameDescending => b_name.cmp(a_name),
            Self::DirectoriesFirst => b_dir.cmp(&a_dir).then_with(|| a_name.cmp(b_name)),
            Self::FilesFirst => a_dir.cmp(&b_dir).then_with(|| a_name.cmp(b_name)),
        }
    }
}

/// What to do when a directory cannot be listed mid-traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreadableDirPolicy {
    /// Yield a `DirectoryUnreadable` error and stop the cursor.
    #[default]
    Fail,
    /// Log a warning and treat the directory as empty.
    Skip,
}

/// What to do when a followed symlink leads back to an ancestor directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymlinkCyclePolicy {
    /// Omit the link and continue.
    #[default]
    Prune,
    /// Yield a `CycleDetected` error and stop the cursor.
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_placement() {
        use TraversePathDepthPolicy::*;

        assert!(PreOrder.yields_dir_before_children());
        assert!(!PreOrder.yields_dir_after_children());
        assert!(PostOrder.yields_dir_after_children());
        assert!(!PostOrder.yields_dir_before_children());
        assert!(DirsOnly.yields_dir_before_children());
        assert!(!DirsOnly.yields_files());
        assert!(FilesOnly.yields_files());
        assert!(!FilesOnly.yields_dirs());
        assert!(LeavesOnly.yields_leaf_dirs());
        assert!(!LeavesOnly.yields_dir_before_children());
        assert!(!LeavesOnly.yields_dir_after_children());
    }

    #[test]
    fn test_sibling_order_by_name() {
        let a = (OsStr::new("a.txt"), false);
        let sub = (OsStr::new("sub"), true);
        let x = (OsStr::new("x.txt"), false);

        assert_eq!(SiblingOrder::ByName.compare(sub, x), Ordering::Less);
        assert_eq!(SiblingOrder::ByNameDescending.compare(sub, x), Ordering::Greater);
        assert_eq!(SiblingOrder::DirectoriesFirst.compare(a, sub), Ordering::Greater);
        assert_eq!(SiblingOrder::FilesFirst.compare(a, sub), Ordering::Less);
        assert_eq!(SiblingOrder::FilesFirst.compare(a, x), Ordering::Less);
    }

    #[test]
    fn test_name_order_is_bytewise() {
        // Uppercase sorts before lowercase.
        let upper = (OsStr::new("Zeta"), false);
        let lower = (OsStr::new("alpha"), false);
        assert_eq!(SiblingOrder::ByName.compare(upper, lower), Ordering::Less);
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&TraversePathDepthPolicy::LeavesOnly).unwrap();
        assert_eq!(json, "\"leaves-only\"");
        let parsed: SiblingOrder = serde_json::from_str("\"directories-first\"").unwrap();
        assert_eq!(parsed, SiblingOrder::DirectoriesFirst);
    }
}
