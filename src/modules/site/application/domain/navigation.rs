use crate::modules::site::application::views::NavLink;

/// Label and client path of every top-level page, in menu order.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Projects", "/projects"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

fn is_active(href: &str, current_path: &str) -> bool {
    if href == "/" {
        return current_path == "/";
    }

    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// `/blog/some-post` keeps "Blog" highlighted; "Home" only matches `/`.
pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|(label, href)| NavLink {
            label: label.to_string(),
            href: href.to_string(),
            active: is_active(href, current_path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<String> {
        nav_links(path)
            .into_iter()
            .filter(|l| l.active)
            .map(|l| l.label)
            .collect()
    }

    #[test]
    fn keeps_menu_order() {
        let labels: Vec<_> = nav_links("/").into_iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Home", "About", "Projects", "Blog", "Contact"]);
    }

    #[test]
    fn root_only_activates_home() {
        assert_eq!(active_labels("/"), ["Home"]);
        assert_eq!(active_labels("/about"), ["About"]);
    }

    #[test]
    fn post_path_activates_blog() {
        assert_eq!(active_labels("/blog/blog-1"), ["Blog"]);
    }

    #[test]
    fn lookalike_prefix_does_not_activate() {
        assert!(active_labels("/blogroll").is_empty());
        assert!(active_labels("/missing").is_empty());
    }
}
