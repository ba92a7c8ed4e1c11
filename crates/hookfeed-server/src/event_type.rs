//! Event kind detection.

use actix_web::HttpRequest;
use hookfeed_models::EventType;
use serde_json::Value;

use crate::constants::GITHUB_EVENT_HEADER;

/// Event kind from the GitHub event header, or from the payload shape when
/// the header is missing.
pub(crate) fn resolve_event_type(req: &HttpRequest, payload: &Value) -> EventType {
    extract_event_type_from_request(req).unwrap_or_else(|| infer_event_type_from_payload(payload))
}

fn extract_event_type_from_request(req: &HttpRequest) -> Option<EventType> {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(EventType::from)
}

fn infer_event_type_from_payload(payload: &Value) -> EventType {
    if payload.get("commits").is_some() {
        EventType::Push
    } else if payload.get("pull_request").is_some() {
        EventType::PullRequest
    } else {
        EventType::unknown()
    }
}
