/// Renders a `YYYY-MM-DD` date with a display pattern such as
/// `MMMM dd, yyyy`.
pub trait DateFormatter: Send + Sync {
    fn format(&self, date: &str, pattern: &str) -> String;
}
