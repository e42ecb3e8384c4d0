use reqwest::Method;

use crate::{
    client::model::error::ApiError,
    model::{
        api::ApiResponse,
        user::{LoginDto, LoginResultDto, RegisterDto, UserDto},
    },
};

use super::{
    finish,
    helper::{parse_empty_response, parse_response, send_request, serialize_json},
    ForumClient,
};

impl ForumClient {
    /// Exchanges credentials for the user snapshot and, if issued, a session token.
    pub async fn login(&self, username: &str, password: &str) -> ApiResponse<LoginResultDto> {
        finish("login", self.try_login(username, password).await)
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<LoginResultDto, ApiError> {
        let payload = LoginDto {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = serialize_json(&payload)?;

        let request = self.request(Method::POST, "/auth/login", &[], None)?;
        let response = send_request(request.body(body)).await?;
        parse_response(response).await
    }

    /// Creates a forum account. The platform returns no payload on success.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResponse<()> {
        finish("register", self.try_register(username, email, password).await)
    }

    async fn try_register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = RegisterDto {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = serialize_json(&payload)?;

        let request = self.request(Method::POST, "/auth/register", &[], None)?;
        let response = send_request(request.body(body)).await?;
        parse_empty_response(response).await
    }

    /// Checks a session token and returns the user it belongs to.
    pub async fn validate_user(&self, token: &str) -> ApiResponse<UserDto> {
        finish("validate_user", self.try_validate_user(token).await)
    }

    async fn try_validate_user(&self, token: &str) -> Result<UserDto, ApiError> {
        let request = self.request(Method::POST, "/auth/validate", &[], Some(token))?;
        let response = send_request(request).await?;
        parse_response(response).await
    }
}
