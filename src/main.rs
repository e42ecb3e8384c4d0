use tower_http::trace::TraceLayer;

use nameless_bridge::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::cors_layer(&config)?;

    let app = router::router()
        .with_state(AppState::new(db, config.api_key.as_str()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
