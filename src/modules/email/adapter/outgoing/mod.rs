pub mod logging_sender;
pub mod smtp_sender;

pub use logging_sender::LoggingEmailSender;
pub use smtp_sender::SmtpEmailSender;
