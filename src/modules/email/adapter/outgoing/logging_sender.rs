use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{
    EmailSendError, EmailSender, OutgoingEmail,
};

/// Stand-in used when no SMTP server is configured. Messages are logged
/// and kept in memory instead of being delivered.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmailSender {
    sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl LoggingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        info!(
            to = %email.to,
            reply_to = email.reply_to.as_deref().unwrap_or("-"),
            subject = %email.subject,
            "SMTP not configured, logging email instead of sending"
        );

        self.sent_emails
            .lock()
            .map_err(|e| EmailSendError::Transport(e.to_string()))?
            .push(email);
        Ok(())
    }
}
