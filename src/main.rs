mod app;
mod auth;
mod config;
mod db;
mod dto;
mod error;
mod extract;
mod handlers;
mod response;

use app::build_router;
use auth::jwt::JwtManager;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser ces règles par défaut
        tracing_subscriber::EnvFilter::new("info,review_api=debug,hyper_util=warn,tower_http=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    tracing::info!("Starting review-api...");

    let config = Config::from_env()?;

    let jwt_manager = JwtManager::new(
        &config.jwt_secret,
        &config.jwt_refresh_secret,
        config.jwt_expiration_secs,
        config.jwt_refresh_expiration_secs,
    );

    let app = build_router(jwt_manager, config.jwt_refresh_expiration_days);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
