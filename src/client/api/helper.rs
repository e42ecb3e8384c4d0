use reqwest::{header, Method, Response};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use url::Url;

use crate::{
    client::{config::Routing, model::error::ApiError},
    model::api::UNKNOWN_ERROR,
};

/// Envelope as sent by the forum platform. Older endpoints use `message`
/// instead of `error` for failures.
#[derive(Deserialize)]
struct RemoteEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl RemoteEnvelope {
    /// The platform's failure text, if it sent a non-blank one.
    fn failure_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Maps a logical endpoint onto the shim that serves it, for rewritten routing.
fn shim_route(method: &Method, path: &str) -> Option<&'static str> {
    if method != Method::GET {
        return None;
    }

    match path {
        "/forum/categories" => Some("/forum_categories"),
        "/forum/topics" => Some("/forum_topics"),
        "/server/info" => Some("/server_info"),
        _ => None,
    }
}

/// Builds the absolute URL of a logical endpoint under the given routing.
///
/// # Arguments
/// - `base_url` - Configured API base URL
/// - `routing` - Deployment routing strategy
/// - `method` - HTTP method; only GET listings are rewritten to shims
/// - `path` - Logical endpoint path such as `/forum/topics`
/// - `query` - Query parameters in the order they should be encoded
///
/// # Returns
/// - `Ok(Url)` - URL to request
/// - `Err(ApiError::Url)` - The base URL is not a valid absolute URL
pub fn build_url(
    base_url: &str,
    routing: &Routing,
    method: &Method,
    path: &str,
    query: &[(&str, String)],
) -> Result<Url, ApiError> {
    match routing {
        Routing::Rewritten { api_key } => {
            let mut url = Url::parse(base_url)?;
            let shim = shim_route(method, path);
            let suffix = shim.unwrap_or(path);

            let existing: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            {
                let mut pairs = url.query_pairs_mut();
                pairs.clear();

                let mut has_route = false;
                for (key, value) in &existing {
                    if key == "route" {
                        pairs.append_pair(key, &format!("{}{}", value, suffix));
                        has_route = true;
                    } else {
                        pairs.append_pair(key, value);
                    }
                }
                if !has_route {
                    pairs.append_pair("route", suffix);
                }

                if shim.is_some() {
                    pairs.append_pair("api_key", api_key);
                }
                for (key, value) in query {
                    pairs.append_pair(key, value);
                }
            }

            Ok(url)
        }
        Routing::Direct { .. } => {
            let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))?;
            if !query.is_empty() {
                let mut pairs = url.query_pairs_mut();
                for (key, value) in query {
                    pairs.append_pair(key, value);
                }
            }

            Ok(url)
        }
    }
}

/// Picks the bearer token for a request: the user's token wins over a configured key.
pub fn bearer_token<'a>(routing: &'a Routing, user_token: Option<&'a str>) -> Option<&'a str> {
    match (user_token, routing) {
        (Some(token), _) => Some(token),
        (None, Routing::Direct { api_key }) => api_key.as_deref(),
        (None, Routing::Rewritten { .. }) => None,
    }
}

/// Create a request with the JSON content type and optional bearer token
pub fn request(
    http: &reqwest::Client,
    method: Method,
    url: Url,
    bearer: Option<&str>,
) -> reqwest::RequestBuilder {
    let builder = http
        .request(method, url)
        .header(header::CONTENT_TYPE, "application/json");

    match bearer {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send a request and handle transport errors
pub async fn send_request(request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
    Ok(request.send().await?)
}

/// Serialize a payload to a JSON body
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<Vec<u8>, ApiError> {
    Ok(serde_json::to_vec(payload)?)
}

/// Reads the body and unwraps the platform envelope.
///
/// Non-2xx responses become `ApiError::Status`, preferring the platform's own message.
async fn parse_envelope(response: Response) -> Result<Option<Value>, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<RemoteEnvelope>(&body)
            .ok()
            .and_then(RemoteEnvelope::failure_message)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: RemoteEnvelope = serde_json::from_slice(&body)?;

    if !envelope.success {
        let message = envelope
            .failure_message()
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Err(ApiError::Remote(message));
    }

    Ok(envelope.data)
}

/// Helper function to parse responses that must carry a payload
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let data = parse_envelope(response).await?.ok_or(ApiError::MissingData)?;
    Ok(serde_json::from_value(data)?)
}

/// Helper function to parse responses whose payload, if any, is ignored
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    parse_envelope(response).await?;
    Ok(())
}
