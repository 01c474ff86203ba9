pub mod get_about_page_service;
pub mod get_home_page_service;

pub use get_about_page_service::GetAboutPageService;
pub use get_home_page_service::GetHomePageService;
