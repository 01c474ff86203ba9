use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::modules::content::application::ContentStore;
use crate::modules::site::application::domain::nav_links;
use crate::modules::site::application::views::{
    social_links, FooterView, PageKind, PageMeta, PageView, ThemeView,
};
use crate::modules::theme::application::ports::incoming::use_cases::ThemeUseCase;

/// Wraps page bodies in the shared shell: meta, navigation, theme, footer.
#[derive(Clone)]
pub struct SiteLayout {
    content: ContentStore,
    theme: Arc<dyn ThemeUseCase + Send + Sync>,
}

impl SiteLayout {
    pub fn new(content: ContentStore, theme: Arc<dyn ThemeUseCase + Send + Sync>) -> Self {
        Self { content, theme }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub async fn render<T: Send>(
        &self,
        kind: PageKind,
        path: &str,
        meta: PageMeta,
        body: T,
    ) -> PageView<T> {
        let is_dark_mode = self.theme.current().await.is_dark_mode;
        let site = self.content.content();

        PageView {
            kind,
            meta,
            theme: ThemeView::new(is_dark_mode, &site.theme),
            nav: nav_links(path),
            footer: self.footer(path),
            body,
        }
    }

    fn footer(&self, path: &str) -> FooterView {
        let info = &self.content.content().personal_info;
        let year = Utc::now().year();

        FooterView {
            brand: info.first_name().to_string(),
            short_bio: info.short_bio.clone(),
            quick_links: nav_links(path),
            social_links: social_links(&info.social_links),
            year,
            copyright: format!("© {} {}. All rights reserved.", year, info.name),
        }
    }
}
