//! Shared error types for the services crate.

use thiserror::Error;

use fiend_core::model::AccountError;
use fiend_core::SubmitFailure;
use storage::{SqliteInitError, StorageError};

/// Errors reported by the backend collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("incorrect account information")]
    InvalidCredentials,
    #[error("resource already exists")]
    Conflict,
    #[error("server error")]
    Server,
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request timed out")]
    TimedOut,
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Whether the same request may succeed if simply sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Server | ApiError::Transport(_) | ApiError::TimedOut
        )
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::InvalidCredentials => Some(400),
            ApiError::Conflict => Some(409),
            ApiError::Server => Some(500),
            ApiError::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::TimedOut
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<ApiError> for SubmitFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::TimedOut => SubmitFailure::TimedOut,
            ApiError::Transport(_) | ApiError::InvalidBaseUrl(_) => SubmitFailure::Transport,
            other => SubmitFailure::Rejected(other.status().unwrap_or(0)),
        }
    }
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionServiceError {
    #[error(transparent)]
    Validation(#[from] AccountError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionServiceError {
    /// Text shown to the user; form input is kept so they can correct it.
    #[must_use]
    pub fn user_message(&self, action: AccountAction) -> String {
        match self {
            SessionServiceError::Validation(err) => err.to_string(),
            SessionServiceError::Api(ApiError::Conflict) => "That user already exists!".into(),
            SessionServiceError::Api(ApiError::InvalidCredentials) => {
                "That appears to be incorrect account information".into()
            }
            SessionServiceError::Api(err) if err.is_retryable() => {
                "Unable to connect to server! Please try again later!".into()
            }
            SessionServiceError::Api(_) => match action {
                AccountAction::SignIn => "That appears to be incorrect account information".into(),
                AccountAction::CreateAccount => "Failed to create profile!".into(),
            },
            SessionServiceError::Storage(_) => {
                "Could not save your session on this device. Please try again.".into()
            }
        }
    }
}

/// Which account form produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountAction {
    SignIn,
    CreateAccount,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
