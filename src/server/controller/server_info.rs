use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        server::ServerInfoDto,
    },
    server::{
        controller::forum::ApiKeyParams, error::AppError, middleware::auth::ApiKeyGuard,
        service::stats::StatsService, state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Get aggregate user and forum statistics.
///
/// Users count as online when they were active in the last 15 minutes.
///
/// # Access Control
/// - `api_key` query parameter must equal the configured shared secret
///
/// # Returns
/// - `200 OK` - Envelope with user and forum counts
/// - `403 Forbidden` - Missing or wrong API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v2/server_info",
    tag = SERVER_TAG,
    params(ApiKeyParams),
    responses(
        (status = 200, description = "User and forum statistics", body = ApiResponse<ServerInfoDto>),
        (status = 403, description = "Invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_info(
    State(state): State<AppState>,
    Query(params): Query<ApiKeyParams>,
) -> Result<impl IntoResponse, AppError> {
    ApiKeyGuard::new(&state.api_key).require(params.api_key.as_deref())?;

    let info = StatsService::new(&state.db).get_server_info().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(info.into_dto()))))
}
