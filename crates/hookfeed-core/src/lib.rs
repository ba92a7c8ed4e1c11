//! Domain module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::events::{
    list_recent_events::ListRecentEvents, process_webhook_event::ProcessWebhookEvent,
    purge_events::PurgeEvents,
};

module! {
    pub CoreModule {
        components = [
            ListRecentEvents, ProcessWebhookEvent, PurgeEvents
        ],
        providers = []
    }
}
