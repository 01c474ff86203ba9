use std::collections::HashSet;

use chrono::NaiveDate;

use super::entities::SiteContent;

pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),

    #[error("Duplicate blog post id: {0}")]
    DuplicateBlogPostId(String),

    #[error("Duplicate social link platform: {0}")]
    DuplicateSocialPlatform(String),

    #[error("Skill '{name}' has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: String, level: u8 },

    #[error("Blog post '{id}' has an invalid date '{date}' (expected YYYY-MM-DD)")]
    InvalidPostDate { id: String, date: String },

    #[error("Empty {0} id")]
    EmptyId(&'static str),

    #[error("microblog.maxWordLimit must be greater than zero")]
    InvalidWordLimit,

    #[error("microblog.dateFormat must not be empty")]
    EmptyDateFormat,
}

pub fn parse_post_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Rejects content that would render inconsistently. Runs once at startup,
/// the first violation aborts the boot.
pub fn validate(content: &SiteContent) -> Result<(), ContentValidationError> {
    let mut seen = HashSet::new();
    for link in &content.personal_info.social_links {
        if !seen.insert(link.platform.as_str()) {
            return Err(ContentValidationError::DuplicateSocialPlatform(
                link.platform.clone(),
            ));
        }
    }

    for skill in &content.skills {
        if skill.level > MAX_SKILL_LEVEL {
            return Err(ContentValidationError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
    }

    let mut seen = HashSet::new();
    for project in &content.projects {
        if project.id.trim().is_empty() {
            return Err(ContentValidationError::EmptyId("project"));
        }
        if !seen.insert(project.id.as_str()) {
            return Err(ContentValidationError::DuplicateProjectId(
                project.id.clone(),
            ));
        }
    }

    let mut seen = HashSet::new();
    for post in &content.blog_posts {
        if post.id.trim().is_empty() {
            return Err(ContentValidationError::EmptyId("blog post"));
        }
        if !seen.insert(post.id.as_str()) {
            return Err(ContentValidationError::DuplicateBlogPostId(post.id.clone()));
        }
        if parse_post_date(&post.date).is_none() {
            return Err(ContentValidationError::InvalidPostDate {
                id: post.id.clone(),
                date: post.date.clone(),
            });
        }
    }

    if content.microblog.max_word_limit == 0 {
        return Err(ContentValidationError::InvalidWordLimit);
    }
    if content.microblog.date_format.trim().is_empty() {
        return Err(ContentValidationError::EmptyDateFormat);
    }

    Ok(())
}
