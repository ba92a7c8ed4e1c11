use serde::{Deserialize, Serialize};

/// GitHub Pull request action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhPullRequestAction {
    /// Opened.
    #[default]
    Opened,
    /// Closed.
    Closed,
    /// Edited.
    Edited,
    /// Reopened.
    Reopened,
    /// Synchronize.
    Synchronize,
    /// Ready for review.
    ReadyForReview,
    /// Converted to draft.
    ConvertedToDraft,
    /// Anything else (labels, assignees, reviews...).
    #[serde(other)]
    Other,
}
