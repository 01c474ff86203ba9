use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetHomePageUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub about: Arc<dyn GetAboutPageUseCase + Send + Sync>,
}
