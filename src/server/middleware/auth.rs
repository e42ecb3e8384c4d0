use crate::server::error::{auth::AuthError, AppError};

/// Checks the shared-secret `api_key` sent by the forum platform's API client.
///
/// Handlers call `require` before touching the database so a rejected request
/// never runs a query.
pub struct ApiKeyGuard<'a> {
    expected: &'a str,
}

impl<'a> ApiKeyGuard<'a> {
    pub fn new(expected: &'a str) -> Self {
        Self { expected }
    }

    /// Accepts the request only when `provided` equals the configured key.
    ///
    /// # Returns
    /// - `Ok(())` - Key matches
    /// - `Err(AppError::AuthErr(AuthError::InvalidApiKey))` - Key missing, empty or wrong
    pub fn require(&self, provided: Option<&str>) -> Result<(), AppError> {
        match provided {
            Some(key) if !self.expected.is_empty() && key == self.expected => Ok(()),
            _ => Err(AuthError::InvalidApiKey.into()),
        }
    }
}
