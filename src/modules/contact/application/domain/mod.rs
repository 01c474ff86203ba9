pub mod form;
pub mod submission;

pub use form::{ContactForm, ContactFormError, ValidContactForm, MAX_MESSAGE_CHARS};
pub use submission::{ContactSubmission, SubmissionError, SubmissionStatus};
