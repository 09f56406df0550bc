use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use fiend_core::model::UserId;
use fiend_core::{QuizOutcome, QuizSubmission, QuizWizard, SubmitFailure, WizardError};

use crate::api::{BackendApi, DEFAULT_TIMEOUT, with_timeout};

/// Sends the first-time quiz to the backend.
#[derive(Clone)]
pub struct QuizService {
    backend: Arc<dyn BackendApi>,
    timeout: Duration,
}

impl QuizService {
    #[must_use]
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self {
            backend,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deliver a packaged submission.
    ///
    /// Callers that keep the wizard in reactive state lock it with
    /// `QuizWizard::begin_submit` first and feed this result to
    /// `QuizWizard::finish_submit`.
    ///
    /// # Errors
    ///
    /// Returns the `SubmitFailure` the wizard should record.
    #[instrument(skip_all, fields(user_id = %submission.user_id))]
    pub async fn send(&self, submission: &QuizSubmission) -> Result<(), SubmitFailure> {
        match with_timeout(self.timeout, self.backend.submit_quiz(submission)).await {
            Ok(()) => {
                info!("quiz submitted");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "quiz submission failed");
                Err(err.into())
            }
        }
    }

    /// Run one full submission against an owned wizard.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` when the wizard refuses to submit (incomplete
    /// answers, a pending or finished submission). Backend failures are not
    /// errors here; they come back as `QuizOutcome::Retry`.
    pub async fn submit(
        &self,
        wizard: &mut QuizWizard,
        user_id: &UserId,
    ) -> Result<QuizOutcome, WizardError> {
        let submission = wizard.begin_submit(user_id)?;
        let result = self.send(&submission).await;
        wizard.finish_submit(result)
    }
}
