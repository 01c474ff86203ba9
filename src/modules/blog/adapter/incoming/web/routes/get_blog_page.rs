use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::SuccessResponse;
use crate::modules::blog::application::domain::BlogFilter;
use crate::modules::blog::application::ports::incoming::use_cases::BlogBody;
use crate::modules::site::application::views::PageView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogPageQuery {
    /// Case-insensitive text matched against title, excerpt and content
    pub search: Option<String>,
    /// Exact tag to filter by
    pub tag: Option<String>,
}

impl From<BlogPageQuery> for BlogFilter {
    fn from(query: BlogPageQuery) -> Self {
        BlogFilter::new(query.search.unwrap_or_default(), query.tag)
    }
}

/// Blog page: filtered post cards and tag chips
#[utoipa::path(
    get,
    path = "/api/pages/blog",
    tag = "pages",
    params(BlogPageQuery),
    responses(
        (status = 200, description = "Blog page view", body = inline(SuccessResponse<PageView<BlogBody>>)),
    )
)]
#[get("/api/pages/blog")]
pub async fn get_blog_page_handler(
    query: web::Query<BlogPageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = BlogFilter::from(query.into_inner());

    ApiResponse::success(data.blog.get_page.execute(filter).await)
}
