use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::profile::application::ports::incoming::use_cases::HomeBody;
use crate::modules::site::application::views::PageView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Home page: hero, featured projects, recent posts
#[utoipa::path(
    get,
    path = "/api/pages/home",
    tag = "pages",
    responses(
        (status = 200, description = "Home page view", body = inline(SuccessResponse<PageView<HomeBody>>)),
    )
)]
#[get("/api/pages/home")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.profile.home.execute().await)
}
