use serde::{Deserialize, Serialize};

use super::{GhGenericEvent, GhPullRequestEvent, GhPushEvent};

/// Decoded webhook delivery.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub enum GhEvent {
    /// Push event.
    Push(GhPushEvent),
    /// Pull request event.
    PullRequest(GhPullRequestEvent),
    /// Any other event kind, with its GitHub name.
    Other {
        /// Event kind, as sent in the `X-GitHub-Event` header.
        kind: String,
        /// Common payload fields.
        event: GhGenericEvent,
    },
}
