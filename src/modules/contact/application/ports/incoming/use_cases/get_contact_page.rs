use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::site::application::views::{PageView, SocialLinkView};

/// What the client needs to draw the form.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactFormView {
    pub action: String,
    pub fields: Vec<String>,
    pub max_message_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactBody {
    pub email: String,
    pub location: String,
    pub social_links: Vec<SocialLinkView>,
    pub form: ContactFormView,
}

#[async_trait]
pub trait GetContactPageUseCase: Send + Sync {
    async fn execute(&self) -> PageView<ContactBody>;
}
