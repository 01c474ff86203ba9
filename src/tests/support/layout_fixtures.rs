use std::sync::Arc;

use crate::modules::content::application::ContentStore;
use crate::modules::content::domain::SiteContent;
use crate::modules::site::application::SiteLayout;
use crate::modules::theme::adapter::outgoing::InMemoryThemePreference;
use crate::modules::theme::application::domain::ThemeState;
use crate::modules::theme::application::service::ThemeService;
use crate::tests::support::content_fixtures::sample_content;

pub fn layout_with(content: SiteContent, is_dark_mode: bool) -> SiteLayout {
    let theme = ThemeService::new(
        InMemoryThemePreference::default(),
        ThemeState::new(is_dark_mode),
    );
    SiteLayout::new(ContentStore::new(content), Arc::new(theme))
}

pub fn sample_layout() -> SiteLayout {
    layout_with(sample_content(), false)
}
