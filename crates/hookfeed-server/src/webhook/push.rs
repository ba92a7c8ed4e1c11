//! Push webhook handlers.

use hookfeed_ghapi_interface::types::GhPushEvent;
use hookfeed_models::EventType;
use serde_json::Value;

use super::parse_event_type;
use crate::Result;

pub(crate) fn parse_push_event(payload: Value) -> Result<GhPushEvent> {
    parse_event_type(EventType::Push, payload)
}
