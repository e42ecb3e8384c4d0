//! In-process stand-in for the forum platform's HTTP API.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};

use crate::client::{
    api::ForumClient,
    config::{ClientConfig, Routing},
};

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Clone)]
struct Canned {
    status: u16,
    body: Value,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct StubState {
    routes: Arc<Mutex<HashMap<String, Canned>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Forum platform stub bound to an ephemeral local port.
///
/// Responses are keyed by `"METHOD /path"`; unknown routes answer 404 with a
/// platform-style error envelope. Every request is recorded.
pub struct StubPlatform {
    addr: String,
    state: StubState,
}

impl StubPlatform {
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr: format!("http://{}", addr),
            state,
        }
    }

    /// Base URL of the stub, without a trailing slash.
    pub fn url(&self) -> &str {
        &self.addr
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) -> &Self {
        self.insert(method, path, status, body, None)
    }

    /// Like [`respond`](Self::respond) but holds the response back for `delay`.
    pub fn respond_after(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: Value,
        delay: Duration,
    ) -> &Self {
        self.insert(method, path, status, body, Some(delay))
    }

    fn insert(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: Value,
        delay: Option<Duration>,
    ) -> &Self {
        self.state.routes.lock().unwrap().insert(
            format!("{} {}", method, path),
            Canned {
                status,
                body,
                delay,
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Client talking to the stub with direct routing and no API key.
    pub fn client(&self) -> ForumClient {
        ForumClient::new(ClientConfig::new(
            self.url(),
            Routing::Direct { api_key: None },
        ))
    }
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let canned = state
        .routes
        .lock()
        .unwrap()
        .get(&format!("{} {}", method, uri.path()))
        .cloned();

    match canned {
        Some(canned) => {
            if let Some(delay) = canned.delay {
                tokio::time::sleep(delay).await;
            }
            let status = StatusCode::from_u16(canned.status).unwrap();
            (status, Json(canned.body)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Not found" })),
        )
            .into_response(),
    }
}
