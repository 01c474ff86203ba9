use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::modules::email::application::ports::outgoing::{
    EmailSendError, EmailSender, OutgoingEmail,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

fn mailbox(address: &str) -> Result<Mailbox, EmailSendError> {
    address
        .parse()
        .map_err(|e| EmailSendError::InvalidAddress(format!("{address}: {e}")))
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// Authenticated relay over TLS.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailSendError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailSendError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    /// Plain connection without TLS or auth, for a local catcher such as Mailpit.
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, EmailSendError> {
        let mut builder = Message::builder()
            .from(mailbox(&self.from_email)?)
            .to(mailbox(&email.to)?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(mailbox(reply_to)?);
        }

        builder
            .body(email.body.clone())
            .map_err(|e| EmailSendError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let message = self.build_message(&email)?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailSendError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /* --------------------------------------------------
     * Mailers
     * -------------------------------------------------- */

    #[derive(Clone, Default)]
    struct CapturingMailer {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            let raw = String::from_utf8_lossy(&email.formatted()).to_string();
            self.sent.lock().unwrap().push(raw);
            Ok(())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            panic!("mailer must not be reached when the message cannot be built");
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    fn contact_email() -> OutgoingEmail {
        OutgoingEmail {
            to: "owner@example.com".to_string(),
            reply_to: Some("jane@example.com".to_string()),
            subject: "New message from Jane".to_string(),
            body: "Hello there".to_string(),
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn sends_plain_text_with_reply_to() {
        let mailer = CapturingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "site@example.com");

        sender.send_email(contact_email()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("Reply-To: jane@example.com"));
        assert!(sent[0].contains("To: owner@example.com"));
        assert!(sent[0].contains("Content-Type: text/plain"));
        assert!(sent[0].contains("Hello there"));
    }

    #[tokio::test]
    async fn omits_reply_to_when_absent() {
        let mailer = CapturingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "site@example.com");

        let email = OutgoingEmail {
            reply_to: None,
            ..contact_email()
        };
        sender.send_email(email).await.unwrap();

        assert!(!mailer.sent.lock().unwrap()[0].contains("Reply-To"));
    }

    #[tokio::test]
    async fn invalid_from_address_is_rejected_before_sending() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "not-an-email");

        let result = sender.send_email(contact_email()).await;

        assert!(matches!(result, Err(EmailSendError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn invalid_reply_to_is_rejected_before_sending() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "site@example.com");

        let email = OutgoingEmail {
            reply_to: Some("jane at example".to_string()),
            ..contact_email()
        };
        let result = sender.send_email(email).await;

        assert!(matches!(result, Err(EmailSendError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(FailingMailer), "site@example.com");

        let result = sender.send_email(contact_email()).await;

        match result {
            Err(EmailSendError::Transport(msg)) => assert!(msg.contains("refused")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
