use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub job_title: String,
    pub short_bio: String,
    pub full_bio: String,
    pub avatar_url: String,
    pub resume_link: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl PersonalInfo {
    /// First word of the owner's name, used as the footer brand.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub background_gradient: String,
    #[serde(default)]
    pub dark_mode_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    pub site_title: String,
    pub site_description: String,
    #[serde(default)]
    pub site_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroblogConfig {
    pub max_word_limit: u32,
    pub enable_tags: bool,
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100.
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The whole content tree the site is rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub personal_info: PersonalInfo,
    pub theme: ThemeConfig,
    pub microblog: MicroblogConfig,
    pub seo: SeoConfig,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SiteContent {
    /// Treats empty optional URLs as absent. Authors tend to leave
    /// `repoUrl: ""` in place of removing the key.
    pub fn normalized(mut self) -> Self {
        for project in &mut self.projects {
            project.live_url = non_blank(project.live_url.take());
            project.repo_url = non_blank(project.repo_url.take());
        }
        for post in &mut self.blog_posts {
            post.image_url = non_blank(post.image_url.take());
        }
        self
    }
}
