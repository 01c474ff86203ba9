pub mod content_store;
pub mod ports;

pub use content_store::ContentStore;
