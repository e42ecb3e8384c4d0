use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        forum::{ForumCategoryDto, ForumTopicDto},
    },
    server::{
        error::AppError,
        middleware::auth::ApiKeyGuard,
        model::{
            category::ForumCategory,
            topic::{parse_page, ForumTopic},
        },
        service::forum::ForumService,
        state::AppState,
    },
};

/// Tag for grouping forum endpoints in OpenAPI documentation
pub static FORUM_TAG: &str = "forum";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApiKeyParams {
    /// Shared secret configured for the forum bridge
    pub api_key: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopicParams {
    /// Shared secret configured for the forum bridge
    pub api_key: Option<String>,
    /// 1-based page number; missing, invalid or below 1 means the first page
    pub page: Option<String>,
}

/// Get top-level forum categories.
///
/// Returns every forum with `parent = 0`, ordered by display order, with topic and
/// post counts and the latest activity in each.
///
/// # Access Control
/// - `api_key` query parameter must equal the configured shared secret
///
/// # Returns
/// - `200 OK` - Envelope with the list of categories (possibly empty)
/// - `403 Forbidden` - Missing or wrong API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v2/forum_categories",
    tag = FORUM_TAG,
    params(ApiKeyParams),
    responses(
        (status = 200, description = "Forum categories", body = ApiResponse<Vec<ForumCategoryDto>>),
        (status = 403, description = "Invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forum_categories(
    State(state): State<AppState>,
    Query(params): Query<ApiKeyParams>,
) -> Result<impl IntoResponse, AppError> {
    ApiKeyGuard::new(&state.api_key).require(params.api_key.as_deref())?;

    let categories = ForumService::new(&state.db).get_categories().await?;

    let dtos: Vec<ForumCategoryDto> = categories
        .into_iter()
        .map(ForumCategory::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dtos))))
}

/// Get the most recent topics.
///
/// Returns topics newest first in pages of 20, with the creator's and last
/// replier's usernames.
///
/// # Access Control
/// - `api_key` query parameter must equal the configured shared secret
///
/// # Returns
/// - `200 OK` - Envelope with one page of topics (empty past the last page)
/// - `403 Forbidden` - Missing or wrong API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v2/forum_topics",
    tag = FORUM_TAG,
    params(TopicParams),
    responses(
        (status = 200, description = "One page of recent topics", body = ApiResponse<Vec<ForumTopicDto>>),
        (status = 403, description = "Invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forum_topics(
    State(state): State<AppState>,
    Query(params): Query<TopicParams>,
) -> Result<impl IntoResponse, AppError> {
    ApiKeyGuard::new(&state.api_key).require(params.api_key.as_deref())?;

    let page = parse_page(params.page.as_deref());
    let topics = ForumService::new(&state.db).get_latest_topics(page).await?;

    let dtos: Vec<ForumTopicDto> = topics.into_iter().map(ForumTopic::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dtos))))
}
