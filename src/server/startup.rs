use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this twice is
/// harmless; the second subscriber is simply not installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = fmt().with_env_filter(filter).try_init() {
        tracing::warn!("Tracing init failed: {}", e);
    }
}

/// Connects to the forum platform's database.
///
/// The schema belongs to the forum platform, so no migrations are run; the
/// connection is only used for reads.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError::DbErr)` - Failed to connect
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Builds the CORS layer for the site front-end.
///
/// Restricted to `CORS_ORIGIN` when configured, open otherwise.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer to apply to the router
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                name: "CORS_ORIGIN".to_string(),
                reason: e.to_string(),
            })?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
