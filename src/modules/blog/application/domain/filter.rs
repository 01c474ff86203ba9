use std::collections::BTreeSet;

use crate::modules::content::domain::BlogPost;

/// Search text plus an optional tag. Both come from the blog page query
/// string and live only for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub search: String,
    pub tag: Option<String>,
}

impl BlogFilter {
    pub fn new(search: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            search: search.into(),
            tag: tag.filter(|t| !t.is_empty()),
        }
    }

    /// Selecting the active tag again clears it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.tag.as_deref() == Some(tag) {
            self.tag = None;
        } else {
            self.tag = Some(tag.to_string());
        }
    }

    /// The tag selection that clicking `tag` would lead to.
    pub fn toggled(&self, tag: &str) -> Option<String> {
        let mut next = self.clone();
        next.toggle_tag(tag);
        next.tag
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle)
            || post.content.to_lowercase().contains(&needle);

        let matches_tag = match &self.tag {
            Some(tag) => post.tags.iter().any(|t| t == tag),
            None => true,
        };

        matches_search && matches_tag
    }
}

/// Posts matching `filter`, in their original order.
pub fn filter_posts<'a>(posts: &'a [BlogPost], filter: &BlogFilter) -> Vec<&'a BlogPost> {
    posts.iter().filter(|post| filter.matches(post)).collect()
}

/// Every distinct tag across `posts`, sorted.
pub fn all_tags(posts: &[BlogPost]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{post, sample_posts};

    fn ids(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    fn scenario_posts() -> Vec<BlogPost> {
        vec![
            post("mern", "Mastering the MERN Stack in 2025", &["React", "Node.js"]),
            post("ts", "Getting Started with TypeScript", &["TypeScript"]),
        ]
    }

    #[test]
    fn empty_filter_returns_every_post_in_order() {
        let posts = sample_posts();

        let result = filter_posts(&posts, &BlogFilter::default());

        assert_eq!(ids(&result), vec!["blog-1", "blog-2", "blog-3"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut posts = scenario_posts();
        posts[0].excerpt = "All about React and friends.".to_string();

        for search in ["react", "REACT", "rEaCt"] {
            let result = filter_posts(&posts, &BlogFilter::new(search, None));
            assert_eq!(ids(&result), vec!["mern"], "search={search}");
        }
    }

    #[test]
    fn search_looks_at_title_excerpt_and_content() {
        let mut posts = scenario_posts();
        posts[1].content = "Deep dive into generics.".to_string();

        let by_title = filter_posts(&posts, &BlogFilter::new("mern", None));
        let by_content = filter_posts(&posts, &BlogFilter::new("GENERICS", None));
        let by_excerpt = filter_posts(&posts, &BlogFilter::new("excerpt for ts", None));

        assert_eq!(ids(&by_title), vec!["mern"]);
        assert_eq!(ids(&by_content), vec!["ts"]);
        assert_eq!(ids(&by_excerpt), vec!["ts"]);
    }

    #[test]
    fn tag_filter_is_exact_and_case_sensitive() {
        let posts = scenario_posts();

        let exact = filter_posts(&posts, &BlogFilter::new("", Some("React".to_string())));
        let lower = filter_posts(&posts, &BlogFilter::new("", Some("react".to_string())));

        assert_eq!(ids(&exact), vec!["mern"]);
        assert!(lower.is_empty());
    }

    #[test]
    fn search_and_tag_combine_with_and() {
        let posts = sample_posts();

        let filter = BlogFilter::new("portfolio", Some("Web Development".to_string()));
        let result = filter_posts(&posts, &filter);
        assert_eq!(ids(&result), vec!["blog-3"]);

        let filter = BlogFilter::new("typescript", Some("Web Development".to_string()));
        assert!(filter_posts(&posts, &filter).is_empty());
    }

    #[test]
    fn every_result_satisfies_the_filter() {
        let posts = sample_posts();
        let searches = ["", "a", "react", "stack", "zzz", "Types"];
        let mut tags: Vec<Option<String>> = all_tags(&posts).into_iter().map(Some).collect();
        tags.push(None);

        for search in searches {
            for tag in &tags {
                let filter = BlogFilter::new(search, tag.clone());
                for p in filter_posts(&posts, &filter) {
                    let needle = search.to_lowercase();
                    assert!(
                        p.title.to_lowercase().contains(&needle)
                            || p.excerpt.to_lowercase().contains(&needle)
                            || p.content.to_lowercase().contains(&needle)
                    );
                    if let Some(t) = tag {
                        assert!(p.tags.contains(t));
                    }
                }
            }
        }
    }

    #[test]
    fn empty_tag_string_means_no_tag() {
        assert_eq!(BlogFilter::new("", Some(String::new())).tag, None);
    }

    #[test]
    fn toggling_same_tag_twice_clears_selection() {
        let mut filter = BlogFilter::default();

        filter.toggle_tag("React");
        assert_eq!(filter.tag.as_deref(), Some("React"));

        filter.toggle_tag("React");
        assert_eq!(filter, BlogFilter::default());
    }

    #[test]
    fn toggling_another_tag_switches_selection() {
        let mut filter = BlogFilter::new("", Some("React".to_string()));

        filter.toggle_tag("TypeScript");

        assert_eq!(filter.tag.as_deref(), Some("TypeScript"));
    }

    #[test]
    fn toggled_previews_without_mutating() {
        let filter = BlogFilter::new("x", Some("React".to_string()));

        assert_eq!(filter.toggled("React"), None);
        assert_eq!(filter.toggled("Career"), Some("Career".to_string()));
        assert_eq!(filter.tag.as_deref(), Some("React"));
    }

    #[test]
    fn all_tags_are_distinct_and_sorted() {
        let tags = all_tags(&sample_posts());

        assert_eq!(
            tags,
            vec![
                "Career",
                "MERN Stack",
                "MongoDB",
                "Node.js",
                "Portfolio",
                "React",
                "TypeScript",
                "Web Development",
            ]
        );
    }

    #[test]
    fn all_tags_of_untagged_posts_is_empty() {
        let posts = vec![post("a", "Untagged", &[])];
        assert!(all_tags(&posts).is_empty());
    }
}
