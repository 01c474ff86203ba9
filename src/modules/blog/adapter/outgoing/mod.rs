pub mod chrono_date_formatter;
pub mod markdown_renderer;

pub use chrono_date_formatter::ChronoDateFormatter;
pub use markdown_renderer::MarkdownRenderer;
