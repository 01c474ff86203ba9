use async_trait::async_trait;

use crate::modules::blog::application::domain::{all_tags, filter_posts, BlogFilter};
use crate::modules::blog::application::ports::incoming::use_cases::{
    BlogBody, GetBlogPageUseCase,
};
use crate::modules::blog::application::ports::outgoing::DateFormatter;
use crate::modules::site::application::views::{BlogCard, PageKind, PageMeta, PageView, TagChip};
use crate::modules::site::application::SiteLayout;

pub struct GetBlogPageService<D>
where
    D: DateFormatter,
{
    layout: SiteLayout,
    dates: D,
}

impl<D> GetBlogPageService<D>
where
    D: DateFormatter,
{
    pub fn new(layout: SiteLayout, dates: D) -> Self {
        Self { layout, dates }
    }
}

fn tag_chips(tags: Vec<String>, filter: &BlogFilter) -> Vec<TagChip> {
    tags.into_iter()
        .map(|tag| TagChip {
            selected: filter.tag.as_deref() == Some(tag.as_str()),
            toggle: filter.toggled(&tag),
            tag,
        })
        .collect()
}

#[async_trait]
impl<D> GetBlogPageUseCase for GetBlogPageService<D>
where
    D: DateFormatter + Send + Sync,
{
    async fn execute(&self, filter: BlogFilter) -> PageView<BlogBody> {
        let site = self.layout.content().content();

        let posts: Vec<BlogCard> = filter_posts(&site.blog_posts, &filter)
            .into_iter()
            .map(|post| BlogCard::new(post, &site.microblog, &self.dates))
            .collect();

        let tags = if site.microblog.enable_tags {
            tag_chips(all_tags(&site.blog_posts), &filter)
        } else {
            Vec::new()
        };

        let body = BlogBody {
            total: posts.len(),
            empty: posts.is_empty(),
            search: filter.search,
            selected_tag: filter.tag,
            tags,
            posts,
        };

        self.layout
            .render(
                PageKind::Blog,
                "/blog",
                PageMeta::titled("Blog", &site.seo),
                body,
            )
            .await
    }
}
