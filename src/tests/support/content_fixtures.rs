use crate::modules::content::domain::{
    BlogPost, MicroblogConfig, PersonalInfo, Project, SeoConfig, SiteContent, Skill, SocialLink,
    ThemeConfig,
};

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn post(id: &str, title: &str, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("Excerpt for {id}"),
        content: format!("## {title}\n\nBody of {id}."),
        date: "2025-01-20".to_string(),
        tags: strings(tags),
        image_url: Some(format!("https://images.example.com/{id}.jpg")),
    }
}

pub fn sample_project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("About {title}."),
        image_url: format!("https://images.example.com/{id}.jpg"),
        technologies: strings(&["Rust"]),
        live_url: None,
        repo_url: Some(format!("https://github.com/example/{id}")),
    }
}

pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "blog-1".to_string(),
            title: "Mastering the MERN Stack in 2025".to_string(),
            excerpt: "A comprehensive guide to building scalable web apps with MongoDB, Express.js, React, and Node.js.".to_string(),
            content: "## Mastering the MERN Stack\n\nThe MERN stack is a **powerhouse**.\n\n```bash\nnpm init -y\n```\n".to_string(),
            date: "2025-01-20".to_string(),
            tags: strings(&["MERN Stack", "React", "Node.js", "MongoDB", "Web Development"]),
            image_url: Some("https://images.example.com/mern.jpg".to_string()),
        },
        BlogPost {
            id: "blog-2".to_string(),
            title: "Getting Started with TypeScript".to_string(),
            excerpt: "Why static types pay off in growing codebases.".to_string(),
            content: "## Types\n\nStart with `strict` mode enabled.".to_string(),
            date: "2025-02-15".to_string(),
            tags: strings(&["TypeScript"]),
            image_url: Some("https://images.example.com/ts.jpg".to_string()),
        },
        BlogPost {
            id: "blog-3".to_string(),
            title: "Building a Developer Portfolio That Stands Out".to_string(),
            excerpt: "Proven strategies to showcase your expertise.".to_string(),
            content: "## Portfolio\n\nUse React and a clean design.".to_string(),
            date: "2025-03-10".to_string(),
            tags: strings(&["Portfolio", "Career", "Web Development"]),
            image_url: Some("https://images.example.com/portfolio.jpg".to_string()),
        },
    ]
}

pub fn sample_content() -> SiteContent {
    SiteContent {
        personal_info: PersonalInfo {
            name: "Akshay Babre".to_string(),
            job_title: "Frontend Developer".to_string(),
            short_bio: "Frontend developer building user-centric web applications.".to_string(),
            full_bio: "I build accessible, scalable web applications.".to_string(),
            avatar_url: "https://images.example.com/avatar.jpg".to_string(),
            resume_link: "https://example.com/resume.pdf".to_string(),
            email: "owner@example.com".to_string(),
            location: "Hyderabad, India".to_string(),
            social_links: vec![
                SocialLink {
                    platform: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                    icon: "Github".to_string(),
                },
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/example".to_string(),
                    icon: "Linkedin".to_string(),
                },
                SocialLink {
                    platform: "Mastodon".to_string(),
                    url: "https://mastodon.social/@example".to_string(),
                    icon: "Mastodon".to_string(),
                },
            ],
        },
        theme: ThemeConfig {
            primary_color: "#3a86ff".to_string(),
            secondary_color: "#8338ec".to_string(),
            accent_color: "#ff006e".to_string(),
            background_color: "#ffffff".to_string(),
            background_gradient: "linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%)"
                .to_string(),
            dark_mode_default: false,
        },
        microblog: MicroblogConfig {
            max_word_limit: 500,
            enable_tags: true,
            date_format: "MMMM dd, yyyy".to_string(),
        },
        seo: SeoConfig {
            site_title: "Akshay Babre | Frontend Developer".to_string(),
            site_description: "Portfolio of Akshay Babre.".to_string(),
            site_keywords: strings(&["JavaScript", "React.js"]),
        },
        skills: vec![
            skill("JavaScript (ES6+)", 85, "Programming"),
            skill("HTML5", 90, "Frontend"),
            skill("TypeScript", 80, "Programming"),
            skill("Redux", 80, "State Management"),
            skill("CSS3", 85, "Frontend"),
            skill("Git", 80, "Tools"),
        ],
        projects: vec![
            Project {
                id: "proj-1".to_string(),
                title: "Mini-YouTube".to_string(),
                description: "A full-stack video platform.".to_string(),
                image_url: "https://images.example.com/video.jpg".to_string(),
                technologies: strings(&["React.js", "Node.js", "MongoDB"]),
                live_url: Some("https://mini-youtube.example.com".to_string()),
                repo_url: Some("https://github.com/example/mini-youtube".to_string()),
            },
            Project {
                id: "proj-2".to_string(),
                title: "Personal Portfolio".to_string(),
                description: "This site.".to_string(),
                image_url: "https://images.example.com/portfolio.jpg".to_string(),
                technologies: strings(&["React.js", "Tailwind CSS"]),
                live_url: Some("https://portfolio.example.com".to_string()),
                repo_url: Some("https://github.com/example/portfolio".to_string()),
            },
        ],
        blog_posts: sample_posts(),
    }
}
