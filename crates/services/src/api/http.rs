use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{instrument, warn};

use fiend_core::QuizSubmission;
use fiend_core::model::{CreateAccount, MonsterInfo, SignIn, UserId, UserStatus};

use super::wire::{CreateAccountRequest, SignInRequest, TokenResponse, UserInfoResponse};
use super::{ApiConfig, BackendApi};
use crate::error::ApiError;

/// Header carrying the subject id on user-scoped requests.
const USER_TOKEN_HEADER: &str = "user_token";

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

fn status_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ApiError::InvalidCredentials
        }
        StatusCode::CONFLICT => ApiError::Conflict,
        status if status.is_server_error() => ApiError::Server,
        status => ApiError::UnexpectedStatus(status.as_u16()),
    }
}

fn expect_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(status = status.as_u16(), url = %response.url(), "backend returned failure");
        Err(status_error(status))
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    #[instrument(skip_all)]
    async fn create_account(&self, request: &CreateAccount) -> Result<String, ApiError> {
        let body = CreateAccountRequest {
            username: request.username(),
            email: request.email(),
            password: request.password(),
        };
        let response = self
            .client
            .post(self.config.endpoint("create_account")?)
            .json(&body)
            .send()
            .await?;
        let token: TokenResponse = expect_success(response)?.json().await?;
        Ok(token.token)
    }

    #[instrument(skip_all)]
    async fn sign_in(&self, request: &SignIn) -> Result<String, ApiError> {
        let body = SignInRequest {
            email: request.email(),
            password: request.password(),
        };
        let response = self
            .client
            .post(self.config.endpoint("login")?)
            .json(&body)
            .send()
            .await?;
        let token: TokenResponse = expect_success(response)?.json().await?;
        Ok(token.token)
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    async fn user_status(&self, user_id: &UserId) -> Result<UserStatus, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("get_user_info")?)
            .header(USER_TOKEN_HEADER, user_id.as_str())
            .send()
            .await?;
        let body: UserInfoResponse = expect_success(response)?.json().await?;
        Ok(body.into_status())
    }

    #[instrument(skip_all, fields(user_id = %submission.user_id))]
    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("submit_user_quiz")?)
            .json(submission)
            .send()
            .await?;
        expect_success(response)?;
        Ok(())
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    async fn level_up(&self, user_id: &UserId) -> Result<MonsterInfo, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("level_monster_up")?)
            .header(USER_TOKEN_HEADER, user_id.as_str())
            .send()
            .await?;
        let body: UserInfoResponse = expect_success(response)?.json().await?;
        body.into_monster()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_api_errors() {
        assert_eq!(
            status_error(StatusCode::BAD_REQUEST),
            ApiError::InvalidCredentials
        );
        assert_eq!(status_error(StatusCode::CONFLICT), ApiError::Conflict);
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Server
        );
        assert_eq!(
            status_error(StatusCode::NOT_FOUND),
            ApiError::UnexpectedStatus(404)
        );
    }
}
