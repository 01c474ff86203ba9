pub mod get_about_page;
pub mod get_home_page;

pub use get_about_page::{AboutBody, GetAboutPageUseCase, ProfileView};
pub use get_home_page::{GetHomePageUseCase, HeroView, HomeBody};
