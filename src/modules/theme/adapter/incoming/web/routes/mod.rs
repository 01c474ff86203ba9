mod get_theme;
mod set_theme;
mod toggle_theme;

pub use get_theme::*;
pub use set_theme::*;
pub use toggle_theme::*;
