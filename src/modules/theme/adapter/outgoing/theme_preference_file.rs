use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, warn};

use crate::modules::theme::application::domain::ThemeState;
use crate::modules::theme::application::ports::outgoing::{
    ThemePreferenceRepository, ThemeRepositoryError, THEME_STORAGE_KEY,
};

/// Shape of the stored entry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTheme {
    is_dark_mode: bool,
}

/// Durable key-value file (a JSON object). The preference lives under
/// [`THEME_STORAGE_KEY`]; any other keys in the file are left untouched.
#[derive(Debug, Clone)]
pub struct ThemePreferenceFile {
    path: PathBuf,
}

impl ThemePreferenceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Option<Map<String, Value>>, ThemeRepositoryError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ThemeRepositoryError::ReadFailed(e.to_string())),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(Some(entries)),
            Ok(_) => Err(ThemeRepositoryError::Corrupt(
                "expected a JSON object".to_string(),
            )),
            Err(e) => Err(ThemeRepositoryError::Corrupt(e.to_string())),
        }
    }
}

#[async_trait]
impl ThemePreferenceRepository for ThemePreferenceFile {
    async fn load(&self) -> Result<Option<ThemeState>, ThemeRepositoryError> {
        let Some(mut entries) = self.read_entries().await? else {
            return Ok(None);
        };

        match entries.remove(THEME_STORAGE_KEY) {
            None => Ok(None),
            Some(value) => serde_json::from_value::<StoredTheme>(value)
                .map(|stored| Some(ThemeState::new(stored.is_dark_mode)))
                .map_err(|e| ThemeRepositoryError::Corrupt(e.to_string())),
        }
    }

    async fn save(&self, state: ThemeState) -> Result<(), ThemeRepositoryError> {
        // Only a corrupt file is replaced; a read failure must not drop other keys.
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries.unwrap_or_default(),
            Err(ThemeRepositoryError::Corrupt(reason)) => {
                warn!(path = %self.path.display(), "Replacing corrupt preference file: {}", reason);
                Map::new()
            }
            Err(e) => return Err(ThemeRepositoryError::WriteFailed(e.to_string())),
        };

        let stored = serde_json::to_value(StoredTheme {
            is_dark_mode: state.is_dark_mode,
        })
        .map_err(|e| ThemeRepositoryError::WriteFailed(e.to_string()))?;
        entries.insert(THEME_STORAGE_KEY.to_string(), stored);

        let body = serde_json::to_string_pretty(&Value::Object(entries))
            .map_err(|e| ThemeRepositoryError::WriteFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ThemeRepositoryError::WriteFailed(e.to_string()))?;
        }

        // Write-then-rename so readers never see a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)
            .await
            .map_err(|e| ThemeRepositoryError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ThemeRepositoryError::WriteFailed(e.to_string()))?;

        debug!(path = %self.path.display(), is_dark_mode = state.is_dark_mode, "Saved theme preference");
        Ok(())
    }
}
