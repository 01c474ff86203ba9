use crate::modules::content::domain::{ContentValidationError, SiteContent};

#[derive(Debug, thiserror::Error)]
pub enum ContentSourceError {
    #[error("Failed to read content document {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unsupported content format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Failed to parse content document: {0}")]
    Parse(String),

    #[error("Invalid content: {0}")]
    Invalid(#[from] ContentValidationError),
}

/// Where the site content comes from. Implementations return content that
/// already passed validation.
pub trait ContentSource: Send + Sync {
    fn load(&self) -> Result<SiteContent, ContentSourceError>;
}
