pub(crate) mod list_recent_events;
pub(crate) mod process_webhook_event;
pub(crate) mod purge_events;

pub use list_recent_events::ListRecentEventsInterface;
pub use process_webhook_event::{build_event, ProcessWebhookEventInterface};
pub use purge_events::PurgeEventsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    list_recent_events::MockListRecentEventsInterface,
    process_webhook_event::MockProcessWebhookEventInterface,
    purge_events::MockPurgeEventsInterface,
};
