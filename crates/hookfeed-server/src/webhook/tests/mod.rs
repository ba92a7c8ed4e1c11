//! Webhook parsing tests


use actix_web::test::TestRequest;
use hookfeed_ghapi_interface::types::{
    GhBranch, GhCommit, GhCommitUser, GhEvent, GhGenericEvent, GhPullRequest,
    GhPullRequestAction, GhPullRequestEvent, GhPushEvent, GhRepository, GhUser,
};
use pretty_assertions::assert_eq;

use super::parse_event;
use crate::{constants::GITHUB_EVENT_HEADER, Result as ServerResult, ServerError};

fn request_for(event_type: &str) -> actix_web::HttpRequest {
    TestRequest::post()
        .insert_header((GITHUB_EVENT_HEADER, event_type))
        .to_http_request()
}

fn test_repository() -> GhRepository {
    GhRepository {
        name: "test-repo".to_string(),
        full_name: "Example/test-repo".to_string(),
        default_branch: Some("main".to_string()),
    }
}

#[test]
fn test_push_event_parsing() -> ServerResult<()> {
    let commit = GhCommit {
        id: "0d1a26e67d8f5eaf1f6ba5c57fc3c7d91ac0fd1c".to_string(),
        message: "Update README.md".to_string(),
    };

    assert_eq!(
        parse_event(&request_for("push"), fixtures::PUSH_EVENT_DATA.as_bytes())?,
        GhEvent::Push(GhPushEvent {
            reference: "refs/heads/main".to_string(),
            pusher: GhCommitUser {
                name: "alice".to_string(),
                email: Some("alice@example.com".to_string()),
            },
            sender: Some(GhUser {
                login: "alice".to_string()
            }),
            repository: Some(test_repository()),
            commits: vec![commit.clone()],
            head_commit: Some(commit),
        })
    );

    Ok(())
}

#[test]
fn test_pull_request_opened_event_parsing() -> ServerResult<()> {
    assert_eq!(
        parse_event(
            &request_for("pull_request"),
            fixtures::PULL_REQUEST_OPENED_DATA.as_bytes()
        )?,
        GhEvent::PullRequest(GhPullRequestEvent {
            action: GhPullRequestAction::Opened,
            pull_request: GhPullRequest {
                number: 2,
                title: "Add a feature".to_string(),
                user: GhUser {
                    login: "bob".to_string()
                },
                head: GhBranch {
                    label: Some("Example:feature".to_string()),
                    reference: "feature".to_string(),
                    sha: "ec26c3e57ca3a959ca5aad62de7213c562f8c821".to_string(),
                },
                base: GhBranch {
                    label: Some("Example:main".to_string()),
                    reference: "main".to_string(),
                    sha: "f95f852bd8fca8fcc58a9a2d6c842781e32a215e".to_string(),
                },
            },
            repository: Some(test_repository()),
            sender: Some(GhUser {
                login: "bob".to_string()
            }),
        })
    );

    Ok(())
}

#[test]
fn test_unknown_event_parsing() -> ServerResult<()> {
    assert_eq!(
        parse_event(&request_for("issues"), fixtures::ISSUES_OPENED_DATA.as_bytes())?,
        GhEvent::Other {
            kind: "issues".to_string(),
            event: GhGenericEvent {
                sender: Some(GhUser {
                    login: "carol".to_string()
                }),
                repository: Some(test_repository()),
            }
        }
    );

    Ok(())
}

#[test]
fn test_ping_event_parsing() -> ServerResult<()> {
    assert_eq!(
        parse_event(&request_for("ping"), fixtures::PING_EVENT_DATA.as_bytes())?,
        GhEvent::Other {
            kind: "ping".to_string(),
            event: GhGenericEvent {
                sender: Some(GhUser {
                    login: "Example".to_string()
                }),
                repository: Some(GhRepository {
                    name: "test-repo".to_string(),
                    full_name: "Example/test-repo".to_string(),
                    default_branch: None,
                }),
            }
        }
    );

    Ok(())
}

#[test]
fn test_unknown_event_with_odd_fields() -> ServerResult<()> {
    assert_eq!(
        parse_event(&request_for("deployment"), br#"{"sender": "not-an-object"}"#)?,
        GhEvent::Other {
            kind: "deployment".to_string(),
            event: GhGenericEvent::default()
        }
    );

    Ok(())
}

#[test]
fn test_push_event_inferred_without_header() -> ServerResult<()> {
    let req = TestRequest::post().to_http_request();

    assert!(matches!(
        parse_event(&req, fixtures::PUSH_EVENT_DATA.as_bytes())?,
        GhEvent::Push(_)
    ));
    assert!(matches!(
        parse_event(&req, fixtures::PULL_REQUEST_OPENED_DATA.as_bytes())?,
        GhEvent::PullRequest(_)
    ));

    Ok(())
}

#[test]
fn test_invalid_payloads() {
    assert!(matches!(
        parse_event(&request_for("push"), b"{not json"),
        Err(ServerError::InvalidJson { .. })
    ));
    assert!(matches!(
        parse_event(&request_for("push"), b"[1, 2]"),
        Err(ServerError::PayloadNotAnObject)
    ));
    assert!(matches!(
        parse_event(&request_for("push"), br#"{"ref": "refs/heads/main"}"#),
        Err(ServerError::EventParseError { .. })
    ));
    assert!(matches!(
        parse_event(
            &request_for("pull_request"),
            br#"{"pull_request": {"user": {"login": "bob"}}}"#
        ),
        Err(ServerError::EventParseError { .. })
    ));
}
