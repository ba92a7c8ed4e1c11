//! Webhook handlers.

mod other;
mod pulls;
mod push;

#[cfg(test)]
pub(crate) mod tests;

use actix_web::{web, HttpRequest, HttpResponse};
use hookfeed_core::{use_cases::events::ProcessWebhookEventInterface, CoreContext};
use hookfeed_ghapi_interface::types::GhEvent;
use hookfeed_models::EventType;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shaku::HasComponent;

use self::{other::parse_other_event, pulls::parse_pull_request_event, push::parse_push_event};
use crate::{
    constants::GITHUB_DELIVERY_HEADER,
    event_type::resolve_event_type,
    metrics::{WEBHOOK_EVENTS_RECEIVED, WEBHOOK_EVENTS_REJECTED},
    server::AppContext,
    Result, ServerError,
};

fn parse_event_type<T>(event_type: EventType, payload: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(payload).map_err(|e| ServerError::EventParseError { event_type, source: e })
}

/// Decode a raw webhook body into a typed event.
pub(crate) fn parse_event(req: &HttpRequest, body: &[u8]) -> Result<GhEvent> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| ServerError::InvalidJson { source: e })?;
    if !payload.is_object() {
        return Err(ServerError::PayloadNotAnObject);
    }

    match resolve_event_type(req, &payload) {
        EventType::Push => parse_push_event(payload).map(GhEvent::Push),
        EventType::PullRequest => parse_pull_request_event(payload).map(GhEvent::PullRequest),
        EventType::Other(kind) => Ok(parse_other_event(kind, payload)),
    }
}

async fn process_event(ctx: &CoreContext<'_>, req: &HttpRequest, body: &[u8]) -> Result<()> {
    let gh_event = parse_event(req, body)?;

    let process_webhook_event: &dyn ProcessWebhookEventInterface = ctx.core_module.resolve_ref();
    process_webhook_event.run(ctx, gh_event).await?;

    Ok(())
}

#[tracing::instrument(skip_all, fields(delivery))]
pub(crate) async fn event_handler(
    req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    if let Some(delivery) = req
        .headers()
        .get(GITHUB_DELIVERY_HEADER)
        .and_then(|x| x.to_str().ok())
    {
        tracing::Span::current().record("delivery", delivery);
    }

    WEBHOOK_EVENTS_RECEIVED.inc();
    if let Err(e) = process_event(&ctx.as_core_context(), &req, &body).await {
        WEBHOOK_EVENTS_REJECTED.inc();
        return Err(e);
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "success"})))
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}
