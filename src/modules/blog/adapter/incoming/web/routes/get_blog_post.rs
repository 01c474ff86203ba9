use actix_web::{get, http::StatusCode, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::blog::application::ports::incoming::use_cases::{
    BlogPostBody, BlogPostOutcome,
};
use crate::modules::site::application::views::{NotFoundBody, PageView};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Single blog post
///
/// Unknown ids answer 404 with the "Post Not Found" page view.
#[utoipa::path(
    get,
    path = "/api/pages/blog/{post_id}",
    tag = "pages",
    params(("post_id" = String, Path, description = "Blog post id")),
    responses(
        (status = 200, description = "Blog post page view", body = inline(SuccessResponse<PageView<BlogPostBody>>)),
        (status = 404, description = "Post not found page view", body = inline(SuccessResponse<PageView<NotFoundBody>>)),
    )
)]
#[get("/api/pages/blog/{post_id}")]
pub async fn get_blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.get_post.execute(&post_id).await {
        BlogPostOutcome::Found(page) => ApiResponse::success(page),
        BlogPostOutcome::NotFound(page) => ApiResponse::with_status(StatusCode::NOT_FOUND, page),
    }
}
