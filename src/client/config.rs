//! Forum API client configuration.

use std::path::PathBuf;

use crate::config::{optional_env, ConfigError};

/// How logical endpoints are mapped onto the forum platform's URLs.
///
/// The two strategies correspond to different deployments of the forum and
/// are chosen by configuration; the client never falls back from one to the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Routing {
    /// The base URL carries a `route` query parameter (`index.php?route=/api/v2`).
    ///
    /// Listing endpoints the platform lacks natively are rewritten to the bridge's
    /// shim endpoints and authenticated with `api_key` in the query string; every
    /// other endpoint is appended to the `route` value.
    Rewritten { api_key: String },
    /// Logical paths are appended to the base URL. A configured key is sent as a
    /// bearer token unless the operation carries the user's own token.
    Direct { api_key: Option<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the forum API, without a trailing slash.
    pub base_url: String,
    pub routing: Routing,
    /// Directory used by the file-backed session store, if any.
    pub session_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, routing: Routing) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            routing,
            session_dir: None,
        }
    }

    /// Loads the client configuration from the environment, reading `.env` first when present.
    ///
    /// # Environment
    /// - `FORUM_API_URL` - required base URL
    /// - `FORUM_ROUTING` - `direct` (default) or `rewritten`
    /// - `FORUM_API_KEY` - required for `rewritten`, optional for `direct`
    /// - `SESSION_DIR` - optional directory for persisted sessions
    ///
    /// # Returns
    /// - `Ok(ClientConfig)` - Configuration ready for [`ForumClient::new`](super::api::ForumClient::new)
    /// - `Err(ConfigError)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(optional_env)
    }

    /// Builds the configuration from a variable lookup that treats blank values as unset.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let base_url = required("FORUM_API_URL")?;

        let routing = match var("FORUM_ROUTING").as_deref() {
            None | Some("direct") => Routing::Direct {
                api_key: var("FORUM_API_KEY"),
            },
            Some("rewritten") => Routing::Rewritten {
                api_key: required("FORUM_API_KEY")?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "FORUM_ROUTING".to_string(),
                    reason: format!("expected 'direct' or 'rewritten', got '{}'", other),
                })
            }
        };

        let mut config = Self::new(base_url, routing);
        config.session_dir = var("SESSION_DIR").map(PathBuf::from);

        Ok(config)
    }
}
