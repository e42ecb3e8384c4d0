use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Reply sent to the forum platform after a webhook delivery.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct WebhookAckDto {
    /// `"ok"` or `"error"`.
    pub status: String,
    /// Whether the event changes what the forum view shows.
    #[serde(default)]
    pub revalidate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookAckDto {
    pub fn ok(revalidate: bool) -> Self {
        Self {
            status: "ok".to_string(),
            revalidate,
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            revalidate: false,
            error: Some(error.into()),
        }
    }
}
