//! Handling of event notifications pushed by the forum platform.

use serde_json::Value;

use crate::server::error::AppError;

/// Events that change what the forum view shows.
///
/// Covers both the human-readable names sent by the platform's webhook module
/// and the machine names used by newer releases.
pub const FORUM_EVENTS: [&str; 4] = [
    "New Topic",
    "Topic reply",
    "forum_topic_created",
    "forum_post_created",
];

pub fn is_forum_event(event: &str) -> bool {
    FORUM_EVENTS.contains(&event)
}

pub struct WebhookService;

impl WebhookService {
    /// Parses a delivery and decides whether cached forum data must be refreshed.
    ///
    /// Any JSON body is accepted; only its `event` string, when present, is inspected.
    ///
    /// # Returns
    /// - `Ok(true)` - A forum event; the forum view must be revalidated
    /// - `Ok(false)` - Any other body, acknowledged and ignored
    /// - `Err(AppError::BadRequest)` - Body is not valid JSON
    pub fn handle(body: &[u8]) -> Result<bool, AppError> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid webhook payload: {}", e)))?;

        let event = payload.get("event").and_then(Value::as_str);
        tracing::debug!("Received forum webhook: {}", payload);

        match event {
            Some(event) if is_forum_event(event) => {
                tracing::info!("Forum webhook event {}, revalidating forum view", event);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
