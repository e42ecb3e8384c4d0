//! Typed client for the forum platform's HTTP API.
//!
//! Every operation returns an [`ApiResponse`]; transport, status and decoding
//! failures are logged and folded into the envelope instead of being returned
//! as Rust errors.

pub mod auth;
pub mod forum;
pub mod helper;
pub mod server;
pub mod user;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};

use crate::{
    client::{config::ClientConfig, model::error::ApiError},
    model::api::ApiResponse,
};

pub use user::UserLookup;

/// Handle to the forum API.
///
/// Holds only the immutable configuration and a pooled HTTP client, so clones
/// are cheap and can be shared across tasks.
#[derive(Clone, Debug)]
pub struct ForumClient {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl ForumClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    pub fn with_http(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a request for a logical endpoint under the configured routing.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `path` - Logical endpoint path, e.g. `/forum/topics`
    /// - `query` - Query parameters, in encoding order
    /// - `user_token` - Session token of the acting user, if the operation needs one
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        user_token: Option<&str>,
    ) -> Result<RequestBuilder, ApiError> {
        let url = helper::build_url(
            &self.config.base_url,
            &self.config.routing,
            &method,
            path,
            query,
        )?;
        let bearer = helper::bearer_token(&self.config.routing, user_token);

        tracing::debug!("{} {}", method, path);

        Ok(helper::request(&self.http, method, url, bearer))
    }
}

/// Folds the outcome of an operation into the envelope, logging failures.
fn finish<T>(operation: &str, result: Result<T, ApiError>) -> ApiResponse<T> {
    if let Err(err) = &result {
        tracing::error!("Forum API {} failed: {}", operation, err);
    }
    result.into()
}
