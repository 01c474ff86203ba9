pub mod icons;
pub mod navigation;

pub use icons::IconGlyph;
pub use navigation::nav_links;
