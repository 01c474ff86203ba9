use async_trait::async_trait;
use tracing::debug;

use crate::modules::blog::application::ports::incoming::use_cases::{
    BlogPostBody, BlogPostOutcome, BlogPostView, GetBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{DateFormatter, MarkupRenderer};
use crate::modules::content::domain::{BlogPost, SiteContent};
use crate::modules::site::application::views::{
    visible_tags, NotFoundBody, PageKind, PageMeta,
};
use crate::modules::site::application::SiteLayout;

pub struct GetBlogPostService<D, M>
where
    D: DateFormatter,
    M: MarkupRenderer,
{
    layout: SiteLayout,
    dates: D,
    markup: M,
}

impl<D, M> GetBlogPostService<D, M>
where
    D: DateFormatter,
    M: MarkupRenderer,
{
    pub fn new(layout: SiteLayout, dates: D, markup: M) -> Self {
        Self {
            layout,
            dates,
            markup,
        }
    }

    fn post_view(&self, post: &BlogPost, site: &SiteContent) -> BlogPostView {
        let word_count = post.content.split_whitespace().count();

        BlogPostView {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date.clone(),
            formatted_date: self.dates.format(&post.date, &site.microblog.date_format),
            tags: visible_tags(post, &site.microblog),
            image_url: post.image_url.clone(),
            content_html: self.markup.render(&post.content),
            word_count,
            over_word_limit: word_count > site.microblog.max_word_limit as usize,
        }
    }
}

fn post_meta(post: &BlogPost, site: &SiteContent) -> PageMeta {
    let mut keywords = site.seo.site_keywords.clone();
    keywords.extend(post.tags.iter().cloned());

    PageMeta {
        title: format!("{} | {}", post.title, site.seo.site_title),
        description: post.excerpt.clone(),
        keywords,
    }
}

#[async_trait]
impl<D, M> GetBlogPostUseCase for GetBlogPostService<D, M>
where
    D: DateFormatter + Send + Sync,
    M: MarkupRenderer + Send + Sync,
{
    async fn execute(&self, post_id: &str) -> BlogPostOutcome {
        let site = self.layout.content().content();
        let path = format!("/blog/{}", post_id);

        match self.layout.content().find_post(post_id) {
            Some(post) => {
                let body = BlogPostBody {
                    post: self.post_view(post, site),
                    back_href: "/blog".to_string(),
                };
                let page = self
                    .layout
                    .render(PageKind::BlogPost, &path, post_meta(post, site), body)
                    .await;
                BlogPostOutcome::Found(page)
            }
            None => {
                debug!(post_id, "Blog post not found");
                let body = NotFoundBody::post();
                let meta = body.meta(&site.seo);
                let page = self
                    .layout
                    .render(PageKind::BlogPostNotFound, &path, meta, body)
                    .await;
                BlogPostOutcome::NotFound(page)
            }
        }
    }
}
