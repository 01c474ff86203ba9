use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::site::application::views::{PageView, SkillGroup};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileView {
    pub name: String,
    pub job_title: String,
    pub full_bio: String,
    pub avatar_url: String,
    pub location: String,
    pub email: String,
    pub resume_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AboutBody {
    pub profile: ProfileView,
    /// Categories in first-seen order.
    pub skill_groups: Vec<SkillGroup>,
}

#[async_trait]
pub trait GetAboutPageUseCase: Send + Sync {
    async fn execute(&self) -> PageView<AboutBody>;
}
