use async_trait::async_trait;

use crate::modules::contact::application::domain::MAX_MESSAGE_CHARS;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactBody, ContactFormView, GetContactPageUseCase,
};
use crate::modules::site::application::views::{social_links, PageKind, PageMeta, PageView};
use crate::modules::site::application::SiteLayout;

pub struct GetContactPageService {
    layout: SiteLayout,
}

impl GetContactPageService {
    pub fn new(layout: SiteLayout) -> Self {
        Self { layout }
    }
}

#[async_trait]
impl GetContactPageUseCase for GetContactPageService {
    async fn execute(&self) -> PageView<ContactBody> {
        let site = self.layout.content().content();
        let info = &site.personal_info;

        let body = ContactBody {
            email: info.email.clone(),
            location: info.location.clone(),
            social_links: social_links(&info.social_links),
            form: ContactFormView {
                action: "/api/contact".to_string(),
                fields: vec!["name".into(), "email".into(), "message".into()],
                max_message_chars: MAX_MESSAGE_CHARS,
            },
        };

        self.layout
            .render(
                PageKind::Contact,
                "/contact",
                PageMeta::titled("Contact", &site.seo),
                body,
            )
            .await
    }
}
