//! HTTP handlers.
//!
//! The read endpoints mirror the forum platform's own API v2 routes so the API
//! client can target them with the rewritten routing strategy.

pub mod forum;
pub mod server_info;
pub mod webhook;

#[cfg(test)]
pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
