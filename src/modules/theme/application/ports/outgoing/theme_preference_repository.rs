use async_trait::async_trait;

use crate::modules::theme::application::domain::ThemeState;

/// Key the preference is stored under.
pub const THEME_STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThemeRepositoryError {
    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    #[error("Stored value is corrupt: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait ThemePreferenceRepository: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<ThemeState>, ThemeRepositoryError>;

    async fn save(&self, state: ThemeState) -> Result<(), ThemeRepositoryError>;
}
