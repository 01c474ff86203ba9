mod get_contact_page;
mod submit_contact;

pub use get_contact_page::*;
pub use submit_contact::*;
