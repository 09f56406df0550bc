//! Client side of the Fiend backend.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use fiend_core::QuizSubmission;
use fiend_core::model::{CreateAccount, MonsterInfo, SignIn, UserId, UserStatus};

use crate::error::ApiError;

mod http;
mod wire;

pub use http::HttpBackend;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints the client consumes. Implemented over HTTP in production and
/// by fakes in tests.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Create an account and return its session token.
    ///
    /// # Errors
    ///
    /// `Conflict` when the email is taken, `Server` on backend failure.
    async fn create_account(&self, request: &CreateAccount) -> Result<String, ApiError>;

    /// Exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for a wrong email/password pair.
    async fn sign_in(&self, request: &SignIn) -> Result<String, ApiError>;

    /// Fetch onboarding and monster state (server truth).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn user_status(&self, user_id: &UserId) -> Result<UserStatus, ApiError>;

    /// Record the completed first-time quiz.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend does not confirm the write.
    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<(), ApiError>;

    /// Level the user's monster up by one.
    ///
    /// # Errors
    ///
    /// `Conflict` when the user has no monster yet.
    async fn level_up(&self, user_id: &UserId) -> Result<MonsterInfo, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let trimmed = base_url.trim();
        let mut url =
            Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(trimmed.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(trimmed.to_string()));
        }
        // Endpoint paths are joined relative to the base.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            timeout,
        })
    }

    /// Read `FIEND_API_URL` and `FIEND_API_TIMEOUT_SECS`, falling back to
    /// local defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `FIEND_API_URL` is malformed.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var("FIEND_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = env::var("FIEND_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
        Self::new(&base_url, timeout)
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

/// Bound a backend call so a stalled server surfaces as a retryable failure.
pub(crate) async fn with_timeout<T, F>(timeout: Duration, call: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| ApiError::TimedOut)?
}
