use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `api_key` query parameter is missing or does not match the shared secret.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 403 Forbidden - For a missing or wrong API key
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidApiKey => {
                tracing::warn!("Rejected request with invalid API key");
                (StatusCode::FORBIDDEN, Json(ErrorDto::new(self.to_string()))).into_response()
            }
        }
    }
}
