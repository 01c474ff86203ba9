use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::theme::application::domain::ThemeState;
use crate::modules::theme::application::ports::outgoing::{
    ThemePreferenceRepository, ThemeRepositoryError,
};

/// Non-durable store, shared between clones. Used when no storage path is
/// configured and in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThemePreference {
    stored: Arc<Mutex<Option<ThemeState>>>,
}

impl InMemoryThemePreference {
    pub fn with_state(state: ThemeState) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Some(state))),
        }
    }
}

#[async_trait]
impl ThemePreferenceRepository for InMemoryThemePreference {
    async fn load(&self) -> Result<Option<ThemeState>, ThemeRepositoryError> {
        self.stored
            .lock()
            .map(|guard| *guard)
            .map_err(|e| ThemeRepositoryError::ReadFailed(e.to_string()))
    }

    async fn save(&self, state: ThemeState) -> Result<(), ThemeRepositoryError> {
        let mut guard = self
            .stored
            .lock()
            .map_err(|e| ThemeRepositoryError::WriteFailed(e.to_string()))?;
        *guard = Some(state);
        Ok(())
    }
}
