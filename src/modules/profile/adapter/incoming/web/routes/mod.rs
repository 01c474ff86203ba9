mod get_about_page;
mod get_home_page;

pub use get_about_page::*;
pub use get_home_page::*;
