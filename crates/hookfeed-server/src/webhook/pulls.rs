//! Pull webhook handlers.

use hookfeed_ghapi_interface::types::GhPullRequestEvent;
use hookfeed_models::EventType;
use serde_json::Value;

use super::parse_event_type;
use crate::Result;

pub(crate) fn parse_pull_request_event(payload: Value) -> Result<GhPullRequestEvent> {
    parse_event_type(EventType::PullRequest, payload)
}
