//! Event feed handlers.

use actix_web::{web, HttpResponse};
use hookfeed_core::use_cases::events::ListRecentEventsInterface;
use serde::Deserialize;
use shaku::HasComponent;

use crate::{server::AppContext, Result};

/// Feed query parameters.
#[derive(Debug, Deserialize)]
pub(crate) struct FeedQuery {
    limit: Option<u64>,
}

#[tracing::instrument(skip(ctx))]
pub(crate) async fn events_list(
    query: web::Query<FeedQuery>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    let ctx = ctx.as_core_context();

    let list_recent_events: &dyn ListRecentEventsInterface = ctx.core_module.resolve_ref();
    let events = list_recent_events.run(&ctx, query.limit).await?;

    Ok(HttpResponse::Ok().json(events))
}
