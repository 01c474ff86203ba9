use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::contact::application::service::SubmitContactService;
use crate::modules::content::application::ContentStore;
use crate::modules::content::domain::SiteContent;
use crate::modules::email::adapter::outgoing::LoggingEmailSender;
use crate::modules::theme::application::ports::incoming::use_cases::ThemeUseCase;
use crate::tests::support::content_fixtures::sample_content;
use crate::tests::support::stubs::StubThemeUseCase;
use crate::AppState;

/// Real page services over the sample content; theme and contact
/// submission can be swapped for stubs.
pub struct TestAppStateBuilder {
    content: SiteContent,
    theme: Arc<dyn ThemeUseCase + Send + Sync>,
    submit_contact: Option<Arc<dyn SubmitContactUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: sample_content(),
            theme: Arc::new(StubThemeUseCase::light()),
            submit_contact: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: SiteContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_theme(mut self, uc: impl ThemeUseCase + Send + Sync + 'static) -> Self {
        self.theme = Arc::new(uc);
        self
    }

    pub fn with_theme_arc(mut self, uc: Arc<dyn ThemeUseCase + Send + Sync>) -> Self {
        self.theme = uc;
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let content = ContentStore::new(self.content);
        let submit_contact = self.submit_contact.unwrap_or_else(|| {
            Arc::new(SubmitContactService::new(
                Arc::new(LoggingEmailSender::new()),
                content.content().personal_info.email.clone(),
                Duration::from_secs(5),
            ))
        });

        web::Data::new(AppState::new(content, self.theme, submit_contact))
    }
}
