use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::modules::contact::application::domain::{ContactForm, ContactSubmission};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactReceipt, SubmitContactUseCase,
};
use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};

/// Marks a fingerprint as in flight until dropped.
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    fingerprint: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(in_flight: &'a Mutex<HashSet<String>>, fingerprint: String) -> Option<Self> {
        let mut set = in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if !set.insert(fingerprint.clone()) {
            return None;
        }

        Some(Self {
            in_flight,
            fingerprint,
        })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.fingerprint);
    }
}

pub struct SubmitContactService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    recipient: String,
    timeout: Duration,
    in_flight: Mutex<HashSet<String>>,
}

impl SubmitContactService {
    pub fn new(
        sender: Arc<dyn EmailSender + Send + Sync>,
        recipient: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
            timeout,
            in_flight: Mutex::new(HashSet::new()),
        }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, form: ContactForm) -> Result<ContactReceipt, ContactError> {
        let form = form.validate()?;

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, form.fingerprint()) else {
            warn!(from = %form.email(), "Duplicate contact submission rejected while in flight");
            return Err(ContactError::InProgress);
        };

        let mut submission = ContactSubmission::new();
        submission.begin()?;

        let email = OutgoingEmail {
            to: self.recipient.clone(),
            reply_to: Some(form.email().to_string()),
            subject: form.subject(),
            body: form.body(),
        };

        match timeout(self.timeout, self.sender.send_email(email)).await {
            Ok(Ok(())) => {
                submission.succeed()?;
                info!(from = %form.email(), "Contact message delivered");
                Ok(ContactReceipt {
                    status: submission.status(),
                })
            }
            Ok(Err(e)) => {
                submission.fail(e.to_string())?;
                error!(
                    reason = submission.failure().unwrap_or_default(),
                    "Contact message delivery failed"
                );
                Err(ContactError::DeliveryFailed(e.to_string()))
            }
            Err(_) => {
                submission.fail("timed out")?;
                warn!(
                    timeout = ?self.timeout,
                    reason = submission.failure().unwrap_or_default(),
                    "Contact message delivery failed"
                );
                Err(ContactError::Timeout(self.timeout))
            }
        }
    }
}
