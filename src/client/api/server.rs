use reqwest::Method;

use crate::{
    client::model::error::ApiError,
    model::{api::ApiResponse, server::ServerInfoDto},
};

use super::{
    finish,
    helper::{parse_response, send_request},
    ForumClient,
};

impl ForumClient {
    /// Get user and forum statistics
    pub async fn get_server_info(&self) -> ApiResponse<ServerInfoDto> {
        finish("get_server_info", self.try_get_server_info().await)
    }

    async fn try_get_server_info(&self) -> Result<ServerInfoDto, ApiError> {
        let request = self.request(Method::GET, "/server/info", &[], None)?;
        let response = send_request(request).await?;
        parse_response(response).await
    }
}
