use log::{info, warn};
use mealmind::{build_state, router, AppConfig, FalProvider};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    if config.image.api_key.is_none() {
        warn!("No image API key configured (set FAL_API_KEY); generation requests will likely fall back to the placeholder");
    }

    let provider = Arc::new(FalProvider::new(&config.image)?);
    let state = build_state(&config, provider).await?;
    let app = router(state, &config.cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MealMind listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
