use async_trait::async_trait;
use hookfeed_models::Event;
use time::OffsetDateTime;

use crate::{DatabaseError, Result};

/// Event store.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DbService: Send + Sync {
    /// Insert an event, returning it with its assigned ID.
    async fn events_create(&self, instance: Event) -> Result<Event>;
    async fn events_get(&self, id: u64) -> Result<Option<Event>>;
    async fn events_get_expect(&self, id: u64) -> Result<Event> {
        self.events_get(id)
            .await?
            .ok_or(DatabaseError::UnknownEventId(id))
    }
    /// Most recent events first, at most `limit` of them.
    async fn events_list_recent(&self, limit: u64) -> Result<Vec<Event>>;
    async fn events_count(&self) -> Result<u64>;
    /// Delete events received strictly before `timestamp`, returning the deleted count.
    async fn events_delete_before(&self, timestamp: OffsetDateTime) -> Result<u64>;
    async fn health_check(&self) -> Result<()>;
}
