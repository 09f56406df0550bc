#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod error;
pub mod monster_service;
pub mod onboarding_service;
pub mod quiz_service;
pub mod session_service;

pub use fiend_core::Clock;

pub use api::{ApiConfig, BackendApi, HttpBackend};
pub use app_services::AppServices;
pub use error::{AccountAction, ApiError, AppServicesError, SessionServiceError};
pub use monster_service::MonsterService;
pub use onboarding_service::{OnboardingService, ProtectedRoute, QuizRoute};
pub use quiz_service::QuizService;
pub use session_service::SessionService;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
