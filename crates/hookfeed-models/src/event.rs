use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::EventType;

/// Normalized webhook event, as stored and served by the feed.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct Event {
    /// Store identifier, zero until the event is inserted.
    pub id: u64,
    /// Event kind.
    pub event_type: EventType,
    /// Login of the user behind the event.
    pub author: String,
    /// Source branch, for pull requests.
    pub from_branch: Option<String>,
    /// Target branch.
    pub to_branch: String,
    /// Repository name.
    pub repository: Option<String>,
    /// Head commit SHA, for pushes.
    pub commit_id: Option<String>,
    /// Time of receipt.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Event {
    /// One-line description of the event, as shown by the viewer.
    pub fn message(&self) -> String {
        match &self.event_type {
            EventType::Push => format!("{} pushed to {}", self.author, self.to_branch),
            EventType::PullRequest => format!(
                "{} created PR: {} → {}",
                self.author,
                self.from_branch.as_deref().unwrap_or_default(),
                self.to_branch
            ),
            EventType::Other(name) => format!("Unknown event type: {name}"),
        }
    }
}
