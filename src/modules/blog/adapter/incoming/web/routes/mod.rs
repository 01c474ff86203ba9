mod get_blog_page;
mod get_blog_post;

pub use get_blog_page::*;
pub use get_blog_post::*;
