use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::site::application::views::{PageView, ProjectCard};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectsBody {
    pub projects: Vec<ProjectCard>,
}

#[async_trait]
pub trait GetProjectsPageUseCase: Send + Sync {
    async fn execute(&self) -> PageView<ProjectsBody>;
}
