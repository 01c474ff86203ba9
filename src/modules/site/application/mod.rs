pub mod domain;
pub mod layout;
pub mod views;

pub use layout::SiteLayout;
