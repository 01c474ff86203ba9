use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::theme::application::domain::ThemeState;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current theme preference
#[utoipa::path(
    get,
    path = "/api/theme",
    tag = "theme",
    responses(
        (status = 200, description = "Current theme", body = inline(SuccessResponse<ThemeState>)),
    )
)]
#[get("/api/theme")]
pub async fn get_theme_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.theme.current().await)
}
