pub mod get_projects_page_service;

pub use get_projects_page_service::GetProjectsPageService;
