use serde::{Deserialize, Serialize};

use super::{GhPullRequest, GhPullRequestAction};
use crate::types::common::{GhRepository, GhUser};

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhPullRequestEvent {
    /// Action.
    #[serde(default)]
    pub action: GhPullRequestAction,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::GhBranch;

    #[test]
    fn parse_payload() {
        let event: GhPullRequestEvent = serde_json::from_str(
            r#"{
                "action": "labeled",
                "pull_request": {
                    "number": 12,
                    "user": {"login": "bob"},
                    "head": {"ref": "feature", "sha": "abc"},
                    "base": {"ref": "main", "sha": "def"}
                },
                "repository": {"name": "repo", "full_name": "me/repo"}
            }"#,
        )
        .unwrap();

        assert_eq!(event.action, GhPullRequestAction::Other);
        assert_eq!(
            event.pull_request.head,
            GhBranch {
                label: None,
                reference: "feature".into(),
                sha: "abc".into()
            }
        );
        assert_eq!(event.pull_request.base.reference, "main");
        assert_eq!(event.pull_request.user.login, "bob");
    }

    #[test]
    fn missing_base_is_rejected() {
        let result = serde_json::from_str::<GhPullRequestEvent>(
            r#"{"pull_request": {"user": {"login": "bob"}, "head": {"ref": "feature"}}}"#,
        );

        assert!(result.is_err());
    }
}
