use async_trait::async_trait;
use hookfeed_ghapi_interface::types::GhEvent;
use hookfeed_models::{Event, EventType};
use shaku::{Component, Interface};
use time::OffsetDateTime;
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessWebhookEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, gh_event: GhEvent) -> Result<Event>;
}

#[derive(Component)]
#[shaku(interface = ProcessWebhookEventInterface)]
pub(crate) struct ProcessWebhookEvent;

#[async_trait]
impl ProcessWebhookEventInterface for ProcessWebhookEvent {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, gh_event: GhEvent) -> Result<Event> {
        let event = ctx
            .db_service
            .events_create(build_event(gh_event, received_now()))
            .await?;

        info!(
            event_id = event.id,
            event_type = %event.event_type,
            author = %event.author,
            to_branch = %event.to_branch,
            message = "Stored webhook event",
        );

        Ok(event)
    }
}

/// Normalize a decoded webhook delivery into an event record.
pub fn build_event(gh_event: GhEvent, timestamp: OffsetDateTime) -> Event {
    match gh_event {
        GhEvent::Push(push) => Event {
            event_type: EventType::Push,
            to_branch: push.branch_name().to_owned(),
            author: push.pusher.name,
            from_branch: None,
            repository: push.repository.map(|r| r.name),
            commit_id: push.head_commit.map(|c| c.id),
            timestamp,
            ..Default::default()
        },
        GhEvent::PullRequest(pr_event) => Event {
            event_type: EventType::PullRequest,
            author: pr_event.pull_request.user.login,
            from_branch: Some(pr_event.pull_request.head.reference),
            to_branch: pr_event.pull_request.base.reference,
            repository: pr_event.repository.map(|r| r.name),
            commit_id: None,
            timestamp,
            ..Default::default()
        },
        GhEvent::Other { kind, event } => Event {
            event_type: EventType::from(kind),
            author: event.sender.map(|s| s.login).unwrap_or_default(),
            from_branch: None,
            to_branch: event
                .repository
                .as_ref()
                .and_then(|r| r.default_branch.clone())
                .unwrap_or_default(),
            repository: event.repository.map(|r| r.name),
            commit_id: None,
            timestamp,
            ..Default::default()
        },
    }
}

// Postgres keeps microseconds, truncate so every driver stores the same instant.
fn received_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}
