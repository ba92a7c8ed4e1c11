use serde::{Deserialize, Serialize};

use crate::types::common::{GhBranch, GhUser};

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    #[serde(default)]
    pub number: u64,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// User.
    pub user: GhUser,
    /// Head branch.
    pub head: GhBranch,
    /// Base branch.
    pub base: GhBranch,
}
