use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot move contact submission from {from:?} to {to:?}")]
pub struct SubmissionError {
    pub from: SubmissionStatus,
    pub to: SubmissionStatus,
}

/// Lifecycle of one contact submission:
/// `Idle -> Submitting -> Succeeded | Failed`. Terminal states stay put.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    status: SubmissionStatus,
    failure: Option<String>,
}

impl Default for ContactSubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
            failure: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    fn transition(
        &mut self,
        expected: SubmissionStatus,
        to: SubmissionStatus,
    ) -> Result<(), SubmissionError> {
        if self.status != expected {
            return Err(SubmissionError {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    pub fn begin(&mut self) -> Result<(), SubmissionError> {
        self.transition(SubmissionStatus::Idle, SubmissionStatus::Submitting)
    }

    pub fn succeed(&mut self) -> Result<(), SubmissionError> {
        self.transition(SubmissionStatus::Submitting, SubmissionStatus::Succeeded)
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), SubmissionError> {
        self.transition(SubmissionStatus::Submitting, SubmissionStatus::Failed)?;
        self.failure = Some(reason.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_succeeded() {
        let mut submission = ContactSubmission::new();
        assert_eq!(submission.status(), SubmissionStatus::Idle);

        submission.begin().unwrap();
        assert_eq!(submission.status(), SubmissionStatus::Submitting);

        submission.succeed().unwrap();
        assert_eq!(submission.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn failure_keeps_reason() {
        let mut submission = ContactSubmission::new();
        submission.begin().unwrap();
        submission.fail("smtp down").unwrap();

        assert_eq!(submission.status(), SubmissionStatus::Failed);
        assert_eq!(submission.failure(), Some("smtp down"));
    }

    #[test]
    fn cannot_finish_without_starting() {
        let mut submission = ContactSubmission::new();

        assert_eq!(
            submission.succeed(),
            Err(SubmissionError {
                from: SubmissionStatus::Idle,
                to: SubmissionStatus::Succeeded
            })
        );
        assert!(submission.fail("x").is_err());
        assert_eq!(submission.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn terminal_states_reject_further_moves() {
        let mut submission = ContactSubmission::new();
        submission.begin().unwrap();
        submission.succeed().unwrap();

        assert!(submission.begin().is_err());
        assert!(submission.fail("late").is_err());
        assert_eq!(submission.status(), SubmissionStatus::Succeeded);
        assert_eq!(submission.failure(), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(SubmissionStatus::Succeeded).unwrap(),
            serde_json::json!("succeeded")
        );
    }
}
