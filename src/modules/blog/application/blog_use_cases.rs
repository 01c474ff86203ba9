use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPageUseCase, GetBlogPostUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub get_page: Arc<dyn GetBlogPageUseCase + Send + Sync>,
    pub get_post: Arc<dyn GetBlogPostUseCase + Send + Sync>,
}
