mod theme_preference;

pub use theme_preference::{ThemeError, ThemeUseCase};
