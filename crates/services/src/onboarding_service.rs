use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use fiend_core::gate::{route_after_onboarding, route_for_quiz};
use fiend_core::model::{UserId, UserStatus};
use fiend_core::{Destination, GateDecision};

use crate::api::{BackendApi, DEFAULT_TIMEOUT, with_timeout};
use crate::error::ApiError;

/// What a protected page should do once the server has answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtectedRoute {
    Render { user_id: UserId, status: UserStatus },
    Redirect(Destination),
    /// Live session, but the status fetch failed.
    Failed(ApiError),
}

/// What the quiz page should do once the server has answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizRoute {
    Render { user_id: UserId },
    Redirect(Destination),
    Failed(ApiError),
}

/// Second-order gate: asks the backend whether onboarding is still due.
#[derive(Clone)]
pub struct OnboardingService {
    backend: Arc<dyn BackendApi>,
    timeout: Duration,
}

impl OnboardingService {
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

    /// # Errors
    ///
    /// Returns `ApiError` if the status fetch fails or times out.
    pub async fn user_status(&self, user_id: &UserId) -> Result<UserStatus, ApiError> {
        with_timeout(self.timeout, self.backend.user_status(user_id)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the status fetch fails or times out.
    pub async fn requires_onboarding(&self, user_id: &UserId) -> Result<bool, ApiError> {
        Ok(self.user_status(user_id).await?.requires_onboarding())
    }

    /// Resolve a gate decision for a protected content page.
    ///
    /// Only the session gate redirects to sign-in; a failed status fetch
    /// with a live token comes back as `Failed`.
    #[instrument(skip_all)]
    pub async fn protected_route(&self, decision: GateDecision) -> ProtectedRoute {
        let claims = match decision {
            GateDecision::Allow(claims) => claims,
            GateDecision::Redirect(destination) => return ProtectedRoute::Redirect(destination),
        };
        let user_id = claims.subject().clone();
        match self.user_status(&user_id).await {
            Ok(status) => match route_after_onboarding(status.requires_onboarding()) {
                Destination::Home => ProtectedRoute::Render { user_id, status },
                destination => {
                    debug!(?destination, "onboarding still due");
                    ProtectedRoute::Redirect(destination)
                }
            },
            Err(err) => {
                warn!(error = %err, "user status fetch failed");
                ProtectedRoute::Failed(err)
            }
        }
    }

    /// Resolve a gate decision for the first-time quiz page.
    #[instrument(skip_all)]
    pub async fn quiz_route(&self, decision: GateDecision) -> QuizRoute {
        let claims = match decision {
            GateDecision::Allow(claims) => claims,
            GateDecision::Redirect(destination) => return QuizRoute::Redirect(destination),
        };
        let user_id = claims.subject().clone();
        match self.user_status(&user_id).await {
            Ok(status) => match route_for_quiz(status.has_finished_quiz) {
                Some(destination) => QuizRoute::Redirect(destination),
                None => QuizRoute::Render { user_id },
            },
            Err(err) => {
                warn!(error = %err, "user status fetch failed");
                QuizRoute::Failed(err)
            }
        }
    }
}
