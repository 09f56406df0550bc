use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument};

use fiend_core::model::{MonsterInfo, UserId};

use crate::api::{BackendApi, DEFAULT_TIMEOUT, with_timeout};
use crate::error::ApiError;

/// Monster progression calls.
#[derive(Clone)]
pub struct MonsterService {
    backend: Arc<dyn BackendApi>,
    timeout: Duration,
}

impl MonsterService {
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

    /// Level the monster up once and return its new state.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Conflict` when the user has no monster yet, or any
    /// transport failure.
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn level_up(&self, user_id: &UserId) -> Result<MonsterInfo, ApiError> {
        let monster = with_timeout(self.timeout, self.backend.level_up(user_id)).await?;
        info!(level = monster.level(), "monster levelled up");
        Ok(monster)
    }
}
