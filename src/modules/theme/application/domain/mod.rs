pub mod entities;

pub use entities::ThemeState;
