/// Turns a post body (Markdown) into displayable HTML.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, source: &str) -> String;
}
