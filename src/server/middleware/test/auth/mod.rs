use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::ApiKeyGuard,
};

/// Tests a request carrying the configured key.
///
/// Expected: Ok(())
#[test]
fn accepts_matching_key() {
    let guard = ApiKeyGuard::new("secret");

    assert!(guard.require(Some("secret")).is_ok());
}

/// Tests a request without a key.
///
/// Expected: Err(AuthError::InvalidApiKey)
#[test]
fn rejects_missing_key() {
    let result = ApiKeyGuard::new("secret").require(None);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidApiKey))
    ));
}

/// Tests a request with a key that differs only in case.
///
/// Expected: Err(AuthError::InvalidApiKey)
#[test]
fn rejects_wrong_key() {
    let result = ApiKeyGuard::new("secret").require(Some("SECRET"));

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidApiKey))
    ));
}

/// Tests an empty key against an empty configured secret.
///
/// Expected: Err(AuthError::InvalidApiKey), an unset secret never matches
#[test]
fn empty_secret_never_matches() {
    let result = ApiKeyGuard::new("").require(Some(""));

    assert!(result.is_err());
}
