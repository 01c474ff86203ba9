pub mod theme_preference_file;
pub mod theme_preference_memory;

pub use theme_preference_file::ThemePreferenceFile;
pub use theme_preference_memory::InMemoryThemePreference;
