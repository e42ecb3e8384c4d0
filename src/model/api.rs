use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Fallback text used when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Uniform outcome of every remote call.
///
/// `success` is true exactly when `data` is present; `error` is only populated
/// (and then never empty) when `success` is false. Use the constructors rather
/// than building the struct by hand to keep that invariant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Builds a failed envelope. An empty message is replaced by a generic one.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };

        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Error message of a failed envelope, `None` on success.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
        }
    }

    /// Converts the envelope into a `Result`, treating a success without data as a failure.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string())),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ApiResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

/// Error body returned by the server endpoints.
///
/// Serializes to the same shape as a failed [`ApiResponse`] so clients can decode
/// either with one type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
