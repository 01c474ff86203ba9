pub mod get_projects_page;

pub use get_projects_page::{GetProjectsPageUseCase, ProjectsBody};
