pub mod get_contact_page;
pub mod submit_contact;

pub use get_contact_page::{ContactBody, ContactFormView, GetContactPageUseCase};
pub use submit_contact::{ContactError, ContactReceipt, SubmitContactUseCase};
