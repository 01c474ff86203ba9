use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::DateFormatter;
use crate::modules::profile::application::ports::incoming::use_cases::get_home_page::{
    FEATURED_PROJECTS, RECENT_POSTS,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetHomePageUseCase, HeroView, HomeBody,
};
use crate::modules::site::application::views::{
    social_links, BlogCard, PageKind, PageMeta, PageView, ProjectCard,
};
use crate::modules::site::application::SiteLayout;

pub struct GetHomePageService<D>
where
    D: DateFormatter,
{
    layout: SiteLayout,
    dates: D,
}

impl<D> GetHomePageService<D>
where
    D: DateFormatter,
{
    pub fn new(layout: SiteLayout, dates: D) -> Self {
        Self { layout, dates }
    }
}

#[async_trait]
impl<D> GetHomePageUseCase for GetHomePageService<D>
where
    D: DateFormatter + Send + Sync,
{
    async fn execute(&self) -> PageView<HomeBody> {
        let site = self.layout.content().content();
        let info = &site.personal_info;

        let body = HomeBody {
            hero: HeroView {
                name: info.name.clone(),
                first_name: info.first_name().to_string(),
                job_title: info.job_title.clone(),
                short_bio: info.short_bio.clone(),
                avatar_url: info.avatar_url.clone(),
                resume_link: info.resume_link.clone(),
                social_links: social_links(&info.social_links),
            },
            featured_projects: site
                .projects
                .iter()
                .take(FEATURED_PROJECTS)
                .map(ProjectCard::from)
                .collect(),
            recent_posts: site
                .blog_posts
                .iter()
                .take(RECENT_POSTS)
                .map(|post| BlogCard::new(post, &site.microblog, &self.dates))
                .collect(),
        };

        self.layout
            .render(PageKind::Home, "/", PageMeta::site(&site.seo), body)
            .await
    }
}
