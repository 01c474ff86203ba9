use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use tracing::debug;

use crate::modules::site::application::views::{NotFoundBody, PageKind};
use crate::shared::api::ApiResponse;
use crate::AppState;

const PAGES_PREFIX: &str = "/api/pages";

/// Maps a request path to the client route it stands for, so
/// `/api/pages/blog/x` and `/blog/x` light up the same nav entry.
fn client_path(request_path: &str) -> &str {
    match request_path.strip_prefix(PAGES_PREFIX) {
        Some("") | Some("/home") => "/",
        Some(rest) => rest,
        None => request_path,
    }
}

/// Catch-all for unknown routes. Registered as the app's default service.
pub async fn not_found_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    debug!(path = %req.path(), "No route matched");

    let body = NotFoundBody::page();
    let meta = body.meta(&data.layout.content().content().seo);
    let page = data
        .layout
        .render(PageKind::NotFound, client_path(req.path()), meta, body)
        .await;

    ApiResponse::with_status(StatusCode::NOT_FOUND, page)
}
