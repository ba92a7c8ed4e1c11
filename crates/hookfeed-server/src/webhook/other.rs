//! Handlers for event kinds without a dedicated type.

use hookfeed_ghapi_interface::types::{GhEvent, GhGenericEvent};
use serde_json::Value;
use tracing::debug;

/// Unknown kinds are never rejected: fields that do not decode are dropped.
pub(crate) fn parse_other_event(kind: String, payload: Value) -> GhEvent {
    let event = serde_json::from_value::<GhGenericEvent>(payload).unwrap_or_else(|e| {
        debug!(
            event_type = %kind,
            error = %e,
            message = "Could not decode common fields, storing without them"
        );
        GhGenericEvent::default()
    });

    GhEvent::Other { kind, event }
}
