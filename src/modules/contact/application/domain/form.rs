use email_address::EmailAddress;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Raw form input as posted by the client.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactForm {
    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Hi! I'd like to talk about a project.")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("{0}: is required")]
    MissingField(&'static str),

    #[error("email: must be a valid email address")]
    InvalidEmail,

    #[error("message: must be at most {max} characters (got {actual})")]
    MessageTooLong { max: usize, actual: usize },
}

/// Trimmed and checked form, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContactForm {
    name: String,
    email: String,
    message: String,
}

fn required(value: &str, field: &'static str) -> Result<String, ContactFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactFormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

impl ContactForm {
    pub fn validate(&self) -> Result<ValidContactForm, ContactFormError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let message = required(&self.message, "message")?;

        if !EmailAddress::is_valid(&email) {
            return Err(ContactFormError::InvalidEmail);
        }

        let actual = message.chars().count();
        if actual > MAX_MESSAGE_CHARS {
            return Err(ContactFormError::MessageTooLong {
                max: MAX_MESSAGE_CHARS,
                actual,
            });
        }

        Ok(ValidContactForm {
            name,
            email,
            message,
        })
    }
}

impl ValidContactForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// SHA-256 over the normalised fields, hex encoded. Two submissions with
    /// the same sender and text share a fingerprint; email case is ignored.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.name.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.email.to_lowercase().as_bytes());
        hasher.update([0u8]);
        hasher.update(self.message.as_bytes());

        format!("{:x}", hasher.finalize())
    }

    pub fn subject(&self) -> String {
        format!("New message from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}\n",
            self.name, self.email, self.message
        )
    }
}
