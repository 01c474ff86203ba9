pub mod get_blog_page_service;
pub mod get_blog_post_service;

pub use get_blog_page_service::GetBlogPageService;
pub use get_blog_post_service::GetBlogPostService;
