use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectsPageUseCase;

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_page: Arc<dyn GetProjectsPageUseCase + Send + Sync>,
}
