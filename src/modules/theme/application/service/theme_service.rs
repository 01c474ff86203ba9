use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::modules::theme::application::domain::ThemeState;
use crate::modules::theme::application::ports::incoming::use_cases::{ThemeError, ThemeUseCase};
use crate::modules::theme::application::ports::outgoing::ThemePreferenceRepository;

pub struct ThemeService<R>
where
    R: ThemePreferenceRepository,
{
    repository: R,
    state: Mutex<ThemeState>,
}

impl<R> ThemeService<R>
where
    R: ThemePreferenceRepository,
{
    pub fn new(repository: R, initial: ThemeState) -> Self {
        Self {
            repository,
            state: Mutex::new(initial),
        }
    }

    /// Restores the stored preference, or starts from `dark_mode_default`
    /// when nothing usable is stored.
    pub async fn initialize(repository: R, dark_mode_default: bool) -> Self {
        let initial = match repository.load().await {
            Ok(Some(stored)) => {
                info!(is_dark_mode = stored.is_dark_mode, "Restored theme preference");
                stored
            }
            Ok(None) => ThemeState::new(dark_mode_default),
            Err(e) => {
                warn!("Ignoring stored theme preference: {}", e);
                ThemeState::new(dark_mode_default)
            }
        };

        Self::new(repository, initial)
    }

    async fn replace_with<F>(&self, next: F) -> Result<ThemeState, ThemeError>
    where
        F: FnOnce(ThemeState) -> ThemeState + Send,
    {
        // Held across the save so writes are applied one at a time.
        let mut guard = self.state.lock().await;
        let updated = next(*guard);

        self.repository
            .save(updated)
            .await
            .map_err(|e| ThemeError::PersistFailed(e.to_string()))?;

        *guard = updated;
        Ok(updated)
    }
}

#[async_trait]
impl<R> ThemeUseCase for ThemeService<R>
where
    R: ThemePreferenceRepository + Send + Sync,
{
    async fn current(&self) -> ThemeState {
        *self.state.lock().await
    }

    async fn toggle(&self) -> Result<ThemeState, ThemeError> {
        self.replace_with(ThemeState::toggled).await
    }

    async fn set_dark_mode(&self, is_dark_mode: bool) -> Result<ThemeState, ThemeError> {
        self.replace_with(move |_| ThemeState::new(is_dark_mode))
            .await
    }

    async fn storage_healthy(&self) -> bool {
        self.repository.load().await.is_ok()
    }
}
