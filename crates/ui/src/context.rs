use std::sync::Arc;

use dioxus::prelude::*;
use services::{AppServices, MonsterService, OnboardingService, QuizService, SessionService};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionService>;
    fn onboarding(&self) -> Arc<OnboardingService>;
    fn quiz(&self) -> Arc<QuizService>;
    fn monster(&self) -> Arc<MonsterService>;
}

impl UiApp for AppServices {
    fn session(&self) -> Arc<SessionService> {
        AppServices::session(self)
    }

    fn onboarding(&self) -> Arc<OnboardingService> {
        AppServices::onboarding(self)
    }

    fn quiz(&self) -> Arc<QuizService> {
        AppServices::quiz(self)
    }

    fn monster(&self) -> Arc<MonsterService> {
        AppServices::monster(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionService>,
    onboarding: Arc<OnboardingService>,
    quiz: Arc<QuizService>,
    monster: Arc<MonsterService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            onboarding: app.onboarding(),
            quiz: app.quiz(),
            monster: app.monster(),
        }
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}

/// Bumped whenever the stored session changes so gated views re-check it.
#[derive(Clone, Copy)]
pub struct SessionEpoch(Signal<u64>);

impl SessionEpoch {
    #[must_use]
    pub fn get(&self) -> u64 {
        (self.0)()
    }

    pub fn bump(&mut self) {
        *self.0.write() += 1;
    }
}

pub fn use_session_epoch_provider() -> SessionEpoch {
    let epoch = use_signal(|| 0_u64);
    use_context_provider(|| SessionEpoch(epoch))
}

#[must_use]
pub fn use_session_epoch() -> SessionEpoch {
    use_context::<SessionEpoch>()
}
