//! Scriptable in-process backend for tests.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use fiend_core::QuizSubmission;
use fiend_core::model::{CreateAccount, MonsterInfo, SignIn, Species, UserId, UserStatus};

use crate::api::BackendApi;
use crate::error::ApiError;

/// How many times each endpoint was hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FakeCalls {
    pub create_account: usize,
    pub sign_in: usize,
    pub user_status: usize,
    pub submit_quiz: usize,
    pub level_up: usize,
}

struct FakeState {
    token: Result<String, ApiError>,
    create_account: Result<String, ApiError>,
    status: Result<UserStatus, ApiError>,
    submit: Result<(), ApiError>,
    submit_delay: Option<Duration>,
    level_up: Result<MonsterInfo, ApiError>,
    calls: FakeCalls,
    submissions: Vec<QuizSubmission>,
}

pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBackend {
    /// A backend for a freshly created user who has not taken the quiz.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                token: Ok("fake-token".into()),
                create_account: Ok("fake-token".into()),
                status: Ok(UserStatus::default()),
                submit: Ok(()),
                submit_delay: None,
                level_up: Ok(MonsterInfo::new(None, Species::Aquatic, 0, 2)),
                calls: FakeCalls::default(),
                submissions: Vec::new(),
            }),
        }
    }

    /// A backend for a user who finished onboarding and owns `monster`.
    #[must_use]
    pub fn onboarded(monster: MonsterInfo) -> Self {
        let backend = Self::new();
        backend.set_status(Ok(UserStatus {
            has_finished_quiz: true,
            monster: Some(monster),
        }));
        backend
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_token(&self, token: Result<String, ApiError>) {
        self.state().token = token;
    }

    pub fn set_create_account(&self, token: Result<String, ApiError>) {
        self.state().create_account = token;
    }

    pub fn set_status(&self, status: Result<UserStatus, ApiError>) {
        self.state().status = status;
    }

    pub fn set_submit(&self, result: Result<(), ApiError>) {
        self.state().submit = result;
    }

    pub fn set_submit_delay(&self, delay: Option<Duration>) {
        self.state().submit_delay = delay;
    }

    pub fn set_level_up(&self, result: Result<MonsterInfo, ApiError>) {
        self.state().level_up = result;
    }

    #[must_use]
    pub fn calls(&self) -> FakeCalls {
        self.state().calls
    }

    #[must_use]
    pub fn submissions(&self) -> Vec<QuizSubmission> {
        self.state().submissions.clone()
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn create_account(&self, _request: &CreateAccount) -> Result<String, ApiError> {
        let mut state = self.state();
        state.calls.create_account += 1;
        state.create_account.clone()
    }

    async fn sign_in(&self, _request: &SignIn) -> Result<String, ApiError> {
        let mut state = self.state();
        state.calls.sign_in += 1;
        state.token.clone()
    }

    async fn user_status(&self, _user_id: &UserId) -> Result<UserStatus, ApiError> {
        let mut state = self.state();
        state.calls.user_status += 1;
        state.status.clone()
    }

    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<(), ApiError> {
        let (delay, result) = {
            let mut state = self.state();
            state.calls.submit_quiz += 1;
            state.submissions.push(submission.clone());
            (state.submit_delay, state.submit.clone())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if result.is_ok() {
            let mut state = self.state();
            if let Ok(status) = state.status.as_mut() {
                status.has_finished_quiz = true;
            }
        }
        result
    }

    async fn level_up(&self, _user_id: &UserId) -> Result<MonsterInfo, ApiError> {
        let mut state = self.state();
        state.calls.level_up += 1;
        state.level_up.clone()
    }
}
