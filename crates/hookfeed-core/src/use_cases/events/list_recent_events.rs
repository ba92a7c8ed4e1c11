use async_trait::async_trait;
use hookfeed_models::Event;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListRecentEventsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, limit: Option<u64>) -> Result<Vec<Event>>;
}

#[derive(Component)]
#[shaku(interface = ListRecentEventsInterface)]
pub(crate) struct ListRecentEvents;

#[async_trait]
impl ListRecentEventsInterface for ListRecentEvents {
    /// The requested limit can only lower the configured feed limit.
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, limit: Option<u64>) -> Result<Vec<Event>> {
        let max_limit = ctx.config.feed.limit;
        let limit = limit.map_or(max_limit, |l| l.min(max_limit));

        Ok(ctx.db_service.events_list_recent(limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use hookfeed_database_interface::DbService;
    use hookfeed_models::Event;
    use pretty_assertions::assert_eq;
    use time::{macros::datetime, Duration};

    use super::*;
    use crate::context::tests::CoreContextTest;

    async fn insert_events(ctx: &CoreContextTest, count: i64) {
        let base = datetime!(2024-05-01 10:00:00 UTC);
        for n in 0..count {
            ctx.db_service
                .events_create(Event {
                    author: format!("user{n}"),
                    to_branch: "main".into(),
                    timestamp: base + Duration::seconds(n),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn bounded_by_config() {
        let mut ctx = CoreContextTest::new();
        ctx.config.feed.limit = 3;
        insert_events(&ctx, 5).await;

        let events = ListRecentEvents.run(&ctx.as_context(), None).await.unwrap();
        assert_eq!(
            events.iter().map(|e| e.author.as_str()).collect::<Vec<_>>(),
            vec!["user4", "user3", "user2"]
        );

        let events = ListRecentEvents
            .run(&ctx.as_context(), Some(100))
            .await
            .unwrap();
        assert_eq!(events.len(), 3);
    }

    #[tokio::test]
    async fn lower_limit_from_request() {
        let ctx = CoreContextTest::new();
        insert_events(&ctx, 5).await;

        let events = ListRecentEvents
            .run(&ctx.as_context(), Some(1))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].author, "user4");
    }
}
