pub mod get_blog_page;
pub mod get_blog_post;

pub use get_blog_page::{BlogBody, GetBlogPageUseCase};
pub use get_blog_post::{BlogPostBody, BlogPostOutcome, BlogPostView, GetBlogPostUseCase};
