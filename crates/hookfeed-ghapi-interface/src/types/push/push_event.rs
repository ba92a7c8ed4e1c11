use serde::{Deserialize, Serialize};

use crate::types::common::{GhCommit, GhCommitUser, GhRepository, GhUser};

/// GitHub Push event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPushEvent {
    /// Reference.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Pusher.
    pub pusher: GhCommitUser,
    /// Sender.
    pub sender: Option<GhUser>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Commits.
    #[serde(default)]
    pub commits: Vec<GhCommit>,
    /// Head commit.
    pub head_commit: Option<GhCommit>,
}

impl GhPushEvent {
    /// Branch name from the pushed reference (`refs/heads/main` gives `main`).
    pub fn branch_name(&self) -> &str {
        self.reference
            .rsplit('/')
            .next()
            .unwrap_or(&self.reference)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn branch_name_from_reference() {
        let event = GhPushEvent {
            reference: "refs/heads/main".into(),
            ..Default::default()
        };
        assert_eq!(event.branch_name(), "main");

        let event = GhPushEvent {
            reference: "develop".into(),
            ..Default::default()
        };
        assert_eq!(event.branch_name(), "develop");
    }

    #[test]
    fn branch_name_keeps_last_segment_only() {
        let event = GhPushEvent {
            reference: "refs/heads/release/1.0".into(),
            ..Default::default()
        };
        assert_eq!(event.branch_name(), "1.0");
    }

    #[test]
    fn parse_minimal_payload() {
        let event: GhPushEvent = serde_json::from_str(
            r#"{"ref": "refs/heads/main", "pusher": {"name": "alice", "email": null}}"#,
        )
        .unwrap();

        assert_eq!(event.pusher.name, "alice");
        assert_eq!(event.commits, vec![]);
        assert_eq!(event.head_commit, None);
    }

    #[test]
    fn missing_pusher_is_rejected() {
        assert!(serde_json::from_str::<GhPushEvent>(r#"{"ref": "refs/heads/main"}"#).is_err());
    }
}
