use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::modules::content::application::ports::outgoing::{ContentSource, ContentSourceError};
use crate::modules::content::domain::{validation, SiteContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self, ContentSourceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ContentSourceError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Content document on disk, JSON or TOML, picked by extension.
#[derive(Debug, Clone)]
pub struct ContentFile {
    path: PathBuf,
}

impl ContentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(raw: &str, format: DocumentFormat) -> Result<SiteContent, ContentSourceError> {
        match format {
            DocumentFormat::Json => {
                serde_json::from_str(raw).map_err(|e| ContentSourceError::Parse(e.to_string()))
            }
            DocumentFormat::Toml => {
                toml::from_str(raw).map_err(|e| ContentSourceError::Parse(e.to_string()))
            }
        }
    }
}

impl ContentSource for ContentFile {
    fn load(&self) -> Result<SiteContent, ContentSourceError> {
        let format = DocumentFormat::from_path(&self.path)?;

        let raw = fs::read_to_string(&self.path).map_err(|e| ContentSourceError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let content = Self::parse(&raw, format)?.normalized();
        validation::validate(&content)?;

        info!(
            path = %self.path.display(),
            projects = content.projects.len(),
            posts = content.blog_posts.len(),
            skills = content.skills.len(),
            "Loaded site content"
        );

        Ok(content)
    }
}
