use thiserror::Error;

/// Failure of a single forum API call.
///
/// Never escapes the client: every operation converts it into a failed
/// [`ApiResponse`](crate::model::api::ApiResponse) whose `error` is this message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or connection failure before a response arrived.
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with a non-2xx status.
    ///
    /// `message` is the platform's own error text when the body carried one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON shape expected for this operation.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The platform reported `success: false`.
    #[error("{0}")]
    Remote(String),

    /// The platform reported success but sent no payload.
    #[error("Response did not contain any data")]
    MissingData,

    /// The configured base URL cannot be combined with the endpoint.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Input rejected locally before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your username and password")]
    MissingCredentials,

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long!")]
    PasswordTooShort { min: usize },

    #[error("Please fill in your username and email")]
    MissingRegistrationFields,

    #[error("Please select a category and ensure you're logged in")]
    NotReadyToPost,

    #[error("You must be logged in to reply")]
    NotLoggedIn,

    #[error("Please enter a title and some content")]
    EmptyContent,

    #[error("Another authentication request is already in progress")]
    AuthInProgress,

    /// The session was logged out while the request was in flight.
    #[error("Logged out before the request completed")]
    Superseded,
}
