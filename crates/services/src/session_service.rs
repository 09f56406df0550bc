use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use fiend_core::model::{CreateAccountDraft, SignInDraft};
use fiend_core::{Clock, Destination, GateDecision, GuestDecision, SessionGate, TokenDecoder};
use storage::{ID_TOKEN_KEY, SessionStore};

use crate::api::{BackendApi, DEFAULT_TIMEOUT, with_timeout};
use crate::error::SessionServiceError;

/// Owns the persisted session token: gating, sign-in, sign-up and logout.
#[derive(Clone)]
pub struct SessionService {
    clock: Clock,
    store: Arc<dyn SessionStore>,
    decoder: Arc<dyn TokenDecoder>,
    backend: Arc<dyn BackendApi>,
    timeout: Duration,
}

impl SessionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        store: Arc<dyn SessionStore>,
        decoder: Arc<dyn TokenDecoder>,
        backend: Arc<dyn BackendApi>,
    ) -> Self {
        Self {
            clock,
            store,
            decoder,
            backend,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The persisted token, if any. A store that cannot be read counts as
    /// signed out.
    pub async fn current_token(&self) -> Option<String> {
        match self.store.get(ID_TOKEN_KEY).await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "session store read failed");
                None
            }
        }
    }

    /// Gate a protected page.
    pub async fn gate(&self) -> GateDecision {
        let token = self.current_token().await;
        SessionGate::new(self.decoder.as_ref()).evaluate(token.as_deref(), self.clock.now_ms())
    }

    /// Gate a guest-only page.
    pub async fn guest_gate(&self) -> GuestDecision {
        let token = self.current_token().await;
        SessionGate::new(self.decoder.as_ref()).guest(token.as_deref(), self.clock.now_ms())
    }

    /// Validate, sign in and persist the returned token.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Validation` without contacting the
    /// backend when a field is missing, `Api` when the backend refuses, and
    /// `Storage` when the token cannot be saved.
    #[instrument(skip_all)]
    pub async fn sign_in(&self, draft: &SignInDraft) -> Result<Destination, SessionServiceError> {
        let request = draft.validate()?;
        let token = with_timeout(self.timeout, self.backend.sign_in(&request))
            .await
            .inspect_err(|err| warn!(error = %err, "sign-in failed"))?;
        self.store.set(ID_TOKEN_KEY, &token).await?;
        info!("signed in");
        Ok(Destination::Home)
    }

    /// Validate, create the account and persist the returned token.
    ///
    /// # Errors
    ///
    /// Same contract as `sign_in`; a taken email surfaces as `ApiError::Conflict`.
    #[instrument(skip_all)]
    pub async fn create_account(
        &self,
        draft: &CreateAccountDraft,
    ) -> Result<Destination, SessionServiceError> {
        let request = draft.validate()?;
        let token = with_timeout(self.timeout, self.backend.create_account(&request))
            .await
            .inspect_err(|err| warn!(error = %err, "account creation failed"))?;
        self.store.set(ID_TOKEN_KEY, &token).await?;
        info!("account created");
        Ok(Destination::Home)
    }

    /// Forget the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the store cannot be cleared.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> Result<Destination, SessionServiceError> {
        self.store.clear().await?;
        info!("logged out");
        Ok(Destination::SignIn)
    }
}
