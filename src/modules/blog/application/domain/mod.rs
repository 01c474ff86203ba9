pub mod filter;

pub use filter::{all_tags, filter_posts, BlogFilter};
