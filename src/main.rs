mod api;
mod health;
mod modules;
mod shared;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::modules::blog::adapter::outgoing::{ChronoDateFormatter, MarkdownRenderer};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::service::{GetBlogPageService, GetBlogPostService};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::contact::application::service::{
    GetContactPageService, SubmitContactService,
};
use crate::modules::content::adapter::outgoing::ContentFile;
use crate::modules::content::application::ContentStore;
use crate::modules::email::adapter::outgoing::{LoggingEmailSender, SmtpEmailSender};
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::GetProjectsPageService;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::{GetAboutPageService, GetHomePageService};
use crate::modules::site::adapter::incoming::web::routes::not_found_handler;
use crate::modules::site::application::SiteLayout;
use crate::modules::theme::adapter::outgoing::ThemePreferenceFile;
use crate::modules::theme::application::ports::incoming::use_cases::ThemeUseCase;
use crate::modules::theme::application::service::ThemeService;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::config::{AppConfig, SmtpConfig};

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentStore,
    pub theme: Arc<dyn ThemeUseCase + Send + Sync>,
    pub layout: SiteLayout,
    pub profile: ProfileUseCases,
    pub project: ProjectUseCases,
    pub blog: BlogUseCases,
    pub contact: ContactUseCases,
}

impl AppState {
    /// Wires every page service over one content store and theme.
    pub fn new(
        content: ContentStore,
        theme: Arc<dyn ThemeUseCase + Send + Sync>,
        submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    ) -> Self {
        let layout = SiteLayout::new(content.clone(), Arc::clone(&theme));

        Self {
            profile: ProfileUseCases {
                home: Arc::new(GetHomePageService::new(layout.clone(), ChronoDateFormatter)),
                about: Arc::new(GetAboutPageService::new(layout.clone())),
            },
            project: ProjectUseCases {
                get_page: Arc::new(GetProjectsPageService::new(layout.clone())),
            },
            blog: BlogUseCases {
                get_page: Arc::new(GetBlogPageService::new(layout.clone(), ChronoDateFormatter)),
                get_post: Arc::new(GetBlogPostService::new(
                    layout.clone(),
                    ChronoDateFormatter,
                    MarkdownRenderer,
                )),
            },
            contact: ContactUseCases {
                get_page: Arc::new(GetContactPageService::new(layout.clone())),
                submit: submit_contact,
            },
            content,
            theme,
            layout,
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn email_sender(config: &AppConfig) -> anyhow::Result<Arc<dyn EmailSender + Send + Sync>> {
    let sender: Arc<dyn EmailSender + Send + Sync> = match &config.smtp {
        SmtpConfig::Local { host, port } => {
            // Local Mailpit
            info!("Sending contact mail through local SMTP at {}:{}", host, port);
            Arc::new(SmtpEmailSender::new_local(host, *port, &config.email_from))
        }
        SmtpConfig::Relay {
            server,
            username,
            password,
        } => {
            info!("Sending contact mail through SMTP relay {}", server);
            Arc::new(
                SmtpEmailSender::new(server, username, password, &config.email_from)
                    .context("Failed to set up SMTP relay")?,
            )
        }
        SmtpConfig::Disabled => {
            warn!("SMTP not configured, contact messages will only be logged");
            Arc::new(LoggingEmailSender::new())
        }
    };

    Ok(sender)
}

fn load_content(path: &Path) -> anyhow::Result<ContentStore> {
    ContentStore::load(&ContentFile::new(path))
        .with_context(|| format!("Failed to load content from {}", path.display()))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Content is validated once here; a bad document stops the boot.
    let content = load_content(&config.content_path)?;

    let theme = ThemeService::initialize(
        ThemePreferenceFile::new(&config.theme_store_path),
        content.content().theme.dark_mode_default,
    )
    .await;

    let recipient = config
        .contact_recipient
        .clone()
        .unwrap_or_else(|| content.content().personal_info.email.clone());
    let submit_contact =
        SubmitContactService::new(email_sender(&config)?, recipient, config.contact_timeout);

    let state = AppState::new(content, Arc::new(theme), Arc::new(submit_contact));

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::to(not_found_handler))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_about_page_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::get_projects_page_handler,
    );
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_page_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_post_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::get_contact_page_handler);
    // Theme
    cfg.service(crate::modules::theme::adapter::incoming::web::routes::get_theme_handler);
    cfg.service(crate::modules::theme::adapter::incoming::web::routes::toggle_theme_handler);
    cfg.service(crate::modules::theme::adapter::incoming::web::routes::set_theme_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    start()
}
