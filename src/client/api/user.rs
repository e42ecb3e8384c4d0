use reqwest::Method;

use crate::{
    client::model::error::ApiError,
    model::{api::ApiResponse, user::UserDto},
};

use super::{
    finish,
    helper::{parse_response, send_request},
    ForumClient,
};

/// How to identify the user to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserLookup {
    Id(i64),
    Username(String),
}

impl ForumClient {
    /// Fetches a public user profile by id or username.
    pub async fn get_user(&self, lookup: UserLookup) -> ApiResponse<UserDto> {
        finish("get_user", self.try_get_user(&lookup).await)
    }

    async fn try_get_user(&self, lookup: &UserLookup) -> Result<UserDto, ApiError> {
        let request = match lookup {
            UserLookup::Id(id) => self.request(Method::GET, &format!("/users/{}", id), &[], None)?,
            UserLookup::Username(username) => self.request(
                Method::GET,
                "/users",
                &[("username", username.clone())],
                None,
            )?,
        };

        let response = send_request(request).await?;
        parse_response(response).await
    }
}
