//! Viewer page.

use actix_web::{http::header::ContentType, HttpResponse};

const INDEX_PAGE: &str = include_str!("../static/index.html");

pub(crate) async fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_PAGE)
}
