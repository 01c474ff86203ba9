use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::contact::application::ports::incoming::use_cases::ContactBody;
use crate::modules::site::application::views::PageView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact page: email, location, social links and form settings
#[utoipa::path(
    get,
    path = "/api/pages/contact",
    tag = "pages",
    responses(
        (status = 200, description = "Contact page view", body = inline(SuccessResponse<PageView<ContactBody>>)),
    )
)]
#[get("/api/pages/contact")]
pub async fn get_contact_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.contact.get_page.execute().await)
}
