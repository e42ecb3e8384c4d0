use axum::{body::Bytes, http::StatusCode, response::IntoResponse, Json};

use crate::{model::webhook::WebhookAckDto, server::service::webhook::WebhookService};

/// Tag for grouping webhook endpoints in OpenAPI documentation
pub static WEBHOOK_TAG: &str = "webhook";

/// Receive an event notification from the forum platform.
///
/// Forum events (new topics and replies) are logged and reported back with
/// `revalidate: true` so the site refreshes its cached forum view.
///
/// # Returns
/// - `200 OK` - Delivery acknowledged
/// - `400 Bad Request` - Body is not valid JSON
#[utoipa::path(
    post,
    path = "/api/nameless-webhook",
    tag = WEBHOOK_TAG,
    request_body(content = String, description = "JSON event from the forum platform", content_type = "application/json"),
    responses(
        (status = 200, description = "Delivery acknowledged", body = WebhookAckDto),
        (status = 400, description = "Malformed body", body = WebhookAckDto)
    ),
)]
pub async fn nameless_webhook(body: Bytes) -> impl IntoResponse {
    match WebhookService::handle(&body) {
        Ok(revalidate) => (StatusCode::OK, Json(WebhookAckDto::ok(revalidate))),
        Err(err) => {
            tracing::warn!("Rejected webhook delivery: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(WebhookAckDto::error(err.to_string())),
            )
        }
    }
}
