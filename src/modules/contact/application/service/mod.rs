pub mod get_contact_page_service;
pub mod submit_contact_service;

pub use get_contact_page_service::GetContactPageService;
pub use submit_contact_service::SubmitContactService;
