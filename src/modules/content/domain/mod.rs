pub mod entities;
pub mod validation;

pub use entities::{
    BlogPost, MicroblogConfig, PersonalInfo, Project, SeoConfig, SiteContent, Skill, SocialLink,
    ThemeConfig,
};
pub use validation::ContentValidationError;
