use serde::{Deserialize, Serialize};

/// GitHub Commit, as embedded in push events.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommit {
    /// SHA.
    pub id: String,
    /// Message.
    #[serde(default)]
    pub message: String,
}
