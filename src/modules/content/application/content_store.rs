use std::sync::Arc;

use crate::modules::content::application::ports::outgoing::{ContentSource, ContentSourceError};
use crate::modules::content::domain::{BlogPost, SiteContent};

/// Read-only view over the loaded content tree.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: Arc<SiteContent>,
}

impl ContentStore {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    pub fn load(source: &dyn ContentSource) -> Result<Self, ContentSourceError> {
        source.load().map(Self::new)
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn find_post(&self, post_id: &str) -> Option<&BlogPost> {
        self.content.blog_posts.iter().find(|p| p.id == post_id)
    }
}
