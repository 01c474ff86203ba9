use pulldown_cmark::{html as md_html, Options, Parser};

use crate::modules::blog::application::ports::outgoing::MarkupRenderer;

/// CommonMark plus tables, strikethrough and task lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(source, options);
        let mut html = String::with_capacity(source.len() * 3 / 2);
        md_html::push_html(&mut html, parser);
        html
    }
}
