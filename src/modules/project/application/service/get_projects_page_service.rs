use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsPageUseCase, ProjectsBody,
};
use crate::modules::site::application::views::{PageKind, PageMeta, PageView, ProjectCard};
use crate::modules::site::application::SiteLayout;

pub struct GetProjectsPageService {
    layout: SiteLayout,
}

impl GetProjectsPageService {
    pub fn new(layout: SiteLayout) -> Self {
        Self { layout }
    }
}

#[async_trait]
impl GetProjectsPageUseCase for GetProjectsPageService {
    async fn execute(&self) -> PageView<ProjectsBody> {
        let site = self.layout.content().content();

        let body = ProjectsBody {
            projects: site.projects.iter().map(ProjectCard::from).collect(),
        };

        self.layout
            .render(
                PageKind::Projects,
                "/projects",
                PageMeta::titled("Projects", &site.seo),
                body,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::sample_content;
    use crate::tests::support::layout_fixtures::{layout_with, sample_layout};

    #[tokio::test]
    async fn lists_every_project_in_document_order() {
        let service = GetProjectsPageService::new(sample_layout());

        let page = service.execute().await;

        let ids: Vec<_> = page.body.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["proj-1", "proj-2"]);
        assert_eq!(page.meta.title, "Projects | Akshay Babre | Frontend Developer");
    }

    #[tokio::test]
    async fn empty_portfolio_renders_empty_list() {
        let mut content = sample_content();
        content.projects.clear();
        let service = GetProjectsPageService::new(layout_with(content, true));

        let page = service.execute().await;

        assert!(page.body.projects.is_empty());
        assert!(page.theme.is_dark_mode);
    }
}
