//! Health check.

use actix_http::StatusCode;
use actix_web::{web, HttpResponse};
use tracing::error;

use crate::server::AppContext;

pub(crate) async fn health_check_route(ctx: web::Data<AppContext>) -> HttpResponse {
    let database_status = match ctx.db_service.health_check().await {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, message = "Database health check failed");
            false
        }
    };

    let (status_code, status) = if database_status {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "down")
    };

    HttpResponse::build(status_code).json(serde_json::json!({
        "status": status,
        "database": database_status,
    }))
}
