use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::blog::application::ports::incoming::use_cases::{
    BlogBody, BlogPostBody, BlogPostView,
};
use crate::modules::contact::application::domain::{ContactForm, SubmissionStatus};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactBody, ContactFormView, ContactReceipt,
};
use crate::modules::project::application::ports::incoming::use_cases::ProjectsBody;
use crate::modules::profile::application::ports::incoming::use_cases::{
    AboutBody, HeroView, HomeBody, ProfileView,
};
use crate::modules::site::application::domain::IconGlyph;
use crate::modules::site::application::views::{
    BlogCard, FooterView, NavLink, NotFoundBody, PageKind, PageMeta, ProjectCard, SkillBar,
    SkillGroup, SocialLinkView, TagChip, ThemeView,
};
use crate::modules::theme::adapter::incoming::web::routes::SetThemeRequest;
use crate::modules::theme::application::domain::ThemeState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Page views, theme preference and contact form for a developer portfolio"
    ),
    paths(
        // Pages
        crate::modules::profile::adapter::incoming::web::routes::get_home_page_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_about_page_handler,
        crate::modules::project::adapter::incoming::web::routes::get_projects_page_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_blog_page_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_blog_post_handler,
        crate::modules::contact::adapter::incoming::web::routes::get_contact_page_handler,

        // Theme
        crate::modules::theme::adapter::incoming::web::routes::get_theme_handler,
        crate::modules::theme::adapter::incoming::web::routes::toggle_theme_handler,
        crate::modules::theme::adapter::incoming::web::routes::set_theme_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Layout
            PageKind,
            PageMeta,
            ThemeView,
            NavLink,
            FooterView,
            SocialLinkView,
            IconGlyph,
            NotFoundBody,

            // Page bodies
            HomeBody,
            HeroView,
            AboutBody,
            ProfileView,
            SkillGroup,
            SkillBar,
            ProjectsBody,
            ProjectCard,
            BlogBody,
            BlogCard,
            TagChip,
            BlogPostBody,
            BlogPostView,
            ContactBody,
            ContactFormView,

            // Theme and contact DTOs
            ThemeState,
            SetThemeRequest,
            ContactForm,
            ContactReceipt,
            SubmissionStatus
        )
    ),
    tags(
        (name = "pages", description = "Page view models, one per client route"),
        (name = "theme", description = "Dark mode preference"),
        (name = "contact", description = "Contact form submission"),
    )
)]
pub struct ApiDoc;
