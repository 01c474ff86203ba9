use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::ports::incoming::use_cases::ProjectsBody;
use crate::modules::site::application::views::PageView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Projects page: every project card
#[utoipa::path(
    get,
    path = "/api/pages/projects",
    tag = "pages",
    responses(
        (status = 200, description = "Projects page view", body = inline(SuccessResponse<PageView<ProjectsBody>>)),
    )
)]
#[get("/api/pages/projects")]
pub async fn get_projects_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.get_page.execute().await)
}
