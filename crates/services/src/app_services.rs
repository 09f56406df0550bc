use std::sync::Arc;
use std::time::Duration;

use fiend_core::{Clock, JwtClaimsDecoder, TokenDecoder};
use storage::Storage;

use crate::api::{ApiConfig, BackendApi, HttpBackend};
use crate::error::AppServicesError;
use crate::monster_service::MonsterService;
use crate::onboarding_service::OnboardingService;
use crate::quiz_service::QuizService;
use crate::session_service::SessionService;

/// Assembles the app-facing services over one store and one backend.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionService>,
    onboarding: Arc<OnboardingService>,
    quiz: Arc<QuizService>,
    monster: Arc<MonsterService>,
}

impl AppServices {
    /// Wire services over an explicit store and backend.
    #[must_use]
    pub fn new(
        storage: &Storage,
        backend: Arc<dyn BackendApi>,
        clock: Clock,
        timeout: Duration,
    ) -> Self {
        let decoder: Arc<dyn TokenDecoder> = Arc::new(JwtClaimsDecoder);
        let session = Arc::new(
            SessionService::new(
                clock,
                Arc::clone(&storage.sessions),
                decoder,
                Arc::clone(&backend),
            )
            .with_timeout(timeout),
        );
        let onboarding =
            Arc::new(OnboardingService::new(Arc::clone(&backend)).with_timeout(timeout));
        let quiz = Arc::new(QuizService::new(Arc::clone(&backend)).with_timeout(timeout));
        let monster = Arc::new(MonsterService::new(backend).with_timeout(timeout));
        Self {
            session,
            onboarding,
            quiz,
            monster,
        }
    }

    /// Build services backed by `SQLite` session storage and the HTTP backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// HTTP client cannot be built.
    pub async fn new_sqlite(
        db_url: &str,
        api: ApiConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let timeout = api.timeout;
        let backend: Arc<dyn BackendApi> = Arc::new(HttpBackend::new(api)?);
        Ok(Self::new(&storage, backend, clock, timeout))
    }

    /// In-memory session storage; nothing survives the process.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Api` if the HTTP client cannot be built.
    pub fn new_in_memory(api: ApiConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let timeout = api.timeout;
        let backend: Arc<dyn BackendApi> = Arc::new(HttpBackend::new(api)?);
        Ok(Self::new(&Storage::in_memory(), backend, clock, timeout))
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn onboarding(&self) -> Arc<OnboardingService> {
        Arc::clone(&self.onboarding)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn monster(&self) -> Arc<MonsterService> {
        Arc::clone(&self.monster)
    }
}
