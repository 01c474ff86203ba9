use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::profile::application::ports::incoming::use_cases::AboutBody;
use crate::modules::site::application::views::PageView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// About page: full profile and skills grouped by category
#[utoipa::path(
    get,
    path = "/api/pages/about",
    tag = "pages",
    responses(
        (status = 200, description = "About page view", body = inline(SuccessResponse<PageView<AboutBody>>)),
    )
)]
#[get("/api/pages/about")]
pub async fn get_about_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.profile.about.execute().await)
}
