use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: &'static str,
    theme_storage: &'static str,
    posts: usize,
    projects: usize,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content document loaded
/// - Theme storage readable
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let site = data.content.content();
    let content_status = if site.personal_info.name.is_empty() {
        "unhealthy"
    } else {
        "ok"
    };

    let theme_status = if data.theme.storage_healthy().await {
        "ok"
    } else {
        "unhealthy"
    };

    let ready = content_status == "ok" && theme_status == "ok";
    let body = ReadinessResponse {
        status: if ready { "ok" } else { "unhealthy" },
        content: content_status,
        theme_storage: theme_status,
        posts: site.blog_posts.len(),
        projects: site.projects.len(),
    };

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
