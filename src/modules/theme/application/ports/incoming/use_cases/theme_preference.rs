use async_trait::async_trait;

use crate::modules::theme::application::domain::ThemeState;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThemeError {
    #[error("Failed to persist theme preference: {0}")]
    PersistFailed(String),
}

/// Single-writer store for the dark-mode flag. Every successful mutation is
/// persisted before it becomes visible.
#[async_trait]
pub trait ThemeUseCase: Send + Sync {
    async fn current(&self) -> ThemeState;

    async fn toggle(&self) -> Result<ThemeState, ThemeError>;

    async fn set_dark_mode(&self, is_dark_mode: bool) -> Result<ThemeState, ThemeError>;

    /// Readiness probe: can the backing storage be read.
    async fn storage_healthy(&self) -> bool;
}
