use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::{
    ContactForm, ContactFormError, SubmissionError, SubmissionStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ContactFormError),

    #[error("An identical submission is already being sent")]
    InProgress,

    #[error("Email delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),

    #[error(transparent)]
    InvalidState(#[from] SubmissionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactReceipt {
    #[schema(example = "succeeded")]
    pub status: SubmissionStatus,
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<ContactReceipt, ContactError>;
}
