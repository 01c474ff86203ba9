use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    AboutBody, GetAboutPageUseCase, ProfileView,
};
use crate::modules::site::application::views::{
    PageKind, PageMeta, PageView, SkillBar, SkillGroup,
};
use crate::modules::site::application::SiteLayout;
use crate::modules::skill::domain::group_by_category;

pub struct GetAboutPageService {
    layout: SiteLayout,
}

impl GetAboutPageService {
    pub fn new(layout: SiteLayout) -> Self {
        Self { layout }
    }
}

#[async_trait]
impl GetAboutPageUseCase for GetAboutPageService {
    async fn execute(&self) -> PageView<AboutBody> {
        let site = self.layout.content().content();
        let info = &site.personal_info;

        let skill_groups = group_by_category(&site.skills)
            .into_iter()
            .map(|(category, skills)| SkillGroup {
                category,
                skills: skills.iter().map(SkillBar::from).collect(),
            })
            .collect();

        let body = AboutBody {
            profile: ProfileView {
                name: info.name.clone(),
                job_title: info.job_title.clone(),
                full_bio: info.full_bio.clone(),
                avatar_url: info.avatar_url.clone(),
                location: info.location.clone(),
                email: info.email.clone(),
                resume_link: info.resume_link.clone(),
            },
            skill_groups,
        };

        self.layout
            .render(
                PageKind::About,
                "/about",
                PageMeta::titled("About", &site.seo),
                body,
            )
            .await
    }
}
