use async_trait::async_trait;
use shaku::{Component, Interface};
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PurgeEventsInterface: Interface {
    /// Delete events older than `max_age`, returning the deleted count.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, max_age: Duration) -> Result<u64>;
}

#[derive(Component)]
#[shaku(interface = PurgeEventsInterface)]
pub(crate) struct PurgeEvents;

#[async_trait]
impl PurgeEventsInterface for PurgeEvents {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, max_age: Duration) -> Result<u64> {
        // No event can be older than the earliest representable date.
        let Some(threshold) = OffsetDateTime::now_utc().checked_sub(max_age) else {
            info!(max_age = %max_age, message = "Retention window out of range, nothing to purge");
            return Ok(0);
        };

        let count = ctx.db_service.events_delete_before(threshold).await?;

        info!(
            count = count,
            threshold = %threshold,
            message = "Purged old events"
        );

        Ok(count)
    }
}
