//! JSON view models returned by the page endpoints.
//!
//! Every page is a [`PageView`]: the layout shell (meta, nav, theme, footer)
//! wrapped around a page-specific body.

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::ports::outgoing::DateFormatter;
use crate::modules::content::domain::{
    BlogPost, MicroblogConfig, Project, SeoConfig, Skill, SocialLink, ThemeConfig,
};
use crate::modules::site::application::domain::IconGlyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    About,
    Projects,
    Blog,
    BlogPost,
    BlogPostNotFound,
    Contact,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl PageMeta {
    /// Bare site title, used by the home page.
    pub fn site(seo: &SeoConfig) -> Self {
        Self {
            title: seo.site_title.clone(),
            description: seo.site_description.clone(),
            keywords: seo.site_keywords.clone(),
        }
    }

    /// `"{page} | {site_title}"` with the site description and keywords.
    pub fn titled(page: &str, seo: &SeoConfig) -> Self {
        Self {
            title: format!("{} | {}", page, seo.site_title),
            ..Self::site(seo)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ThemeView {
    pub is_dark_mode: bool,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub background_gradient: String,
}

impl ThemeView {
    pub fn new(is_dark_mode: bool, colors: &ThemeConfig) -> Self {
        Self {
            is_dark_mode,
            primary_color: colors.primary_color.clone(),
            secondary_color: colors.secondary_color.clone(),
            accent_color: colors.accent_color.clone(),
            background_color: colors.background_color.clone(),
            background_gradient: colors.background_gradient.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SocialLinkView {
    pub platform: String,
    pub url: String,
    pub icon: IconGlyph,
}

impl From<&SocialLink> for SocialLinkView {
    fn from(link: &SocialLink) -> Self {
        Self {
            platform: link.platform.clone(),
            url: link.url.clone(),
            icon: IconGlyph::resolve(&link.icon),
        }
    }
}

pub fn social_links(links: &[SocialLink]) -> Vec<SocialLinkView> {
    links.iter().map(SocialLinkView::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FooterView {
    pub brand: String,
    pub short_bio: String,
    pub quick_links: Vec<NavLink>,
    pub social_links: Vec<SocialLinkView>,
    pub year: i32,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageView<T> {
    pub kind: PageKind,
    pub meta: PageMeta,
    pub theme: ThemeView,
    pub nav: Vec<NavLink>,
    pub footer: FooterView,
    pub body: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            technologies: project.technologies.clone(),
            live_url: project.live_url.clone(),
            repo_url: project.repo_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub formatted_date: String,
    /// Empty when tags are disabled for the site.
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub href: String,
}

impl BlogCard {
    pub fn new(post: &BlogPost, microblog: &MicroblogConfig, dates: &dyn DateFormatter) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date.clone(),
            formatted_date: dates.format(&post.date, &microblog.date_format),
            tags: visible_tags(post, microblog),
            image_url: post.image_url.clone(),
            href: format!("/blog/{}", post.id),
        }
    }
}

pub fn visible_tags(post: &BlogPost, microblog: &MicroblogConfig) -> Vec<String> {
    if microblog.enable_tags {
        post.tags.clone()
    } else {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillBar {
    pub name: String,
    pub level: u8,
}

impl From<&Skill> for SkillBar {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TagChip {
    pub tag: String,
    pub selected: bool,
    /// The `tag` query value that clicking this chip produces; `None`
    /// clears the selection.
    pub toggle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NotFoundBody {
    pub heading: String,
    pub message: String,
    pub link_label: String,
    pub link_href: String,
}

impl NotFoundBody {
    pub const PAGE_TITLE: &'static str = "Page Not Found";
    pub const POST_TITLE: &'static str = "Post Not Found";

    pub fn page() -> Self {
        Self {
            heading: Self::PAGE_TITLE.to_string(),
            message: "The page you're looking for doesn't exist or has been moved.".to_string(),
            link_label: "Back to Home".to_string(),
            link_href: "/".to_string(),
        }
    }

    pub fn post() -> Self {
        Self {
            heading: Self::POST_TITLE.to_string(),
            message: "The blog post you're looking for doesn't exist or has been removed."
                .to_string(),
            link_label: "Back to Blog".to_string(),
            link_href: "/blog".to_string(),
        }
    }

    /// Not-found pages carry their heading as the whole title.
    pub fn meta(&self, seo: &SeoConfig) -> PageMeta {
        PageMeta {
            title: self.heading.clone(),
            ..PageMeta::site(seo)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::adapter::outgoing::ChronoDateFormatter;
    use crate::tests::support::content_fixtures::sample_content;

    #[test]
    fn titled_meta_appends_site_title() {
        let content = sample_content();

        let meta = PageMeta::titled("About", &content.seo);

        assert_eq!(meta.title, "About | Akshay Babre | Frontend Developer");
        assert_eq!(meta.description, content.seo.site_description);
    }

    #[test]
    fn social_link_view_resolves_icon_with_default() {
        let content = sample_content();

        let views = social_links(&content.personal_info.social_links);

        let icons: Vec<_> = views.iter().map(|v| v.icon).collect();
        assert_eq!(
            icons,
            [IconGlyph::Github, IconGlyph::Linkedin, IconGlyph::Mail]
        );
    }

    #[test]
    fn blog_card_formats_date_and_links_to_post() {
        let content = sample_content();
        let post = &content.blog_posts[0];

        let card = BlogCard::new(post, &content.microblog, &ChronoDateFormatter);

        assert_eq!(card.formatted_date, "January 20, 2025");
        assert_eq!(card.href, "/blog/blog-1");
        assert_eq!(card.tags, post.tags);
    }

    #[test]
    fn blog_card_hides_tags_when_disabled() {
        let mut content = sample_content();
        content.microblog.enable_tags = false;

        let card = BlogCard::new(
            &content.blog_posts[0],
            &content.microblog,
            &ChronoDateFormatter,
        );

        assert!(card.tags.is_empty());
    }

    #[test]
    fn project_card_keeps_absent_urls_absent() {
        let mut content = sample_content();
        content.projects[0].live_url = None;

        let card = ProjectCard::from(&content.projects[0]);

        assert_eq!(card.live_url, None);
        assert_eq!(card.repo_url, content.projects[0].repo_url);
    }
}
