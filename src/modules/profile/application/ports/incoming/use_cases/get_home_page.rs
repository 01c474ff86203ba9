use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::site::application::views::{BlogCard, PageView, ProjectCard, SocialLinkView};

pub const FEATURED_PROJECTS: usize = 3;
pub const RECENT_POSTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HeroView {
    pub name: String,
    pub first_name: String,
    pub job_title: String,
    pub short_bio: String,
    pub avatar_url: String,
    pub resume_link: String,
    pub social_links: Vec<SocialLinkView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomeBody {
    pub hero: HeroView,
    pub featured_projects: Vec<ProjectCard>,
    pub recent_posts: Vec<BlogCard>,
}

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    async fn execute(&self) -> PageView<HomeBody>;
}
