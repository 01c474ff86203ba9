use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactForm, SubmissionStatus};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactReceipt, SubmitContactUseCase,
};
use crate::modules::theme::application::domain::ThemeState;
use crate::modules::theme::application::ports::incoming::use_cases::{ThemeError, ThemeUseCase};

/* --------------------------------------------------
 * Theme
 * -------------------------------------------------- */

/// Keeps the flag in memory; `failing()` refuses every write and reports
/// unreadable storage.
pub struct StubThemeUseCase {
    state: Mutex<ThemeState>,
    fail: bool,
}

impl StubThemeUseCase {
    pub fn light() -> Self {
        Self {
            state: Mutex::new(ThemeState::new(false)),
            fail: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            state: Mutex::new(ThemeState::new(true)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            state: Mutex::new(ThemeState::new(false)),
            fail: true,
        }
    }

    fn write(&self, next: impl FnOnce(ThemeState) -> ThemeState) -> Result<ThemeState, ThemeError> {
        if self.fail {
            return Err(ThemeError::PersistFailed("disk full".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        *state = next(*state);
        Ok(*state)
    }
}

#[async_trait]
impl ThemeUseCase for StubThemeUseCase {
    async fn current(&self) -> ThemeState {
        *self.state.lock().unwrap()
    }

    async fn toggle(&self) -> Result<ThemeState, ThemeError> {
        self.write(ThemeState::toggled)
    }

    async fn set_dark_mode(&self, is_dark_mode: bool) -> Result<ThemeState, ThemeError> {
        self.write(|_| ThemeState::new(is_dark_mode))
    }

    async fn storage_healthy(&self) -> bool {
        !self.fail
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

pub struct StubSubmitContactUseCase {
    result: Result<ContactReceipt, ContactError>,
}

impl StubSubmitContactUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(ContactReceipt {
                status: SubmissionStatus::Succeeded,
            }),
        }
    }

    pub fn error(err: ContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _form: ContactForm) -> Result<ContactReceipt, ContactError> {
        self.result.clone()
    }
}
