pub mod theme_preference_repository;

pub use theme_preference_repository::{
    ThemePreferenceRepository, ThemeRepositoryError, THEME_STORAGE_KEY,
};
