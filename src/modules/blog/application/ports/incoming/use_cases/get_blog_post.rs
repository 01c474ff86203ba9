use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::site::application::views::{NotFoundBody, PageView};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogPostView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub formatted_date: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    /// Post body rendered from Markdown.
    pub content_html: String,
    pub word_count: usize,
    pub over_word_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogPostBody {
    pub post: BlogPostView,
    pub back_href: String,
}

/// An unknown post id is an ordinary outcome, not an error.
#[derive(Debug, Clone)]
pub enum BlogPostOutcome {
    Found(PageView<BlogPostBody>),
    NotFound(PageView<NotFoundBody>),
}

#[async_trait]
pub trait GetBlogPostUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> BlogPostOutcome;
}
