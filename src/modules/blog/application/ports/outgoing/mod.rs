pub mod date_formatter;
pub mod markup_renderer;

pub use date_formatter::DateFormatter;
pub use markup_renderer::MarkupRenderer;
