use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::domain::BlogFilter;
use crate::modules::site::application::views::{BlogCard, PageView, TagChip};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogBody {
    pub search: String,
    pub selected_tag: Option<String>,
    /// Empty when tags are disabled for the site.
    pub tags: Vec<TagChip>,
    pub posts: Vec<BlogCard>,
    pub total: usize,
    /// True when nothing matched; the client shows its empty state.
    pub empty: bool,
}

#[async_trait]
pub trait GetBlogPageUseCase: Send + Sync {
    async fn execute(&self, filter: BlogFilter) -> PageView<BlogBody>;
}
