use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pv_server::api::{self, AppState, SharedState};
use pv_server::keys::KeySource;
use pv_server::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    tracing::info!("pv-server starting...");
    tracing::info!("  vk:      {}", config.vk_path.display());
    tracing::info!("  timeout: {:?}", config.verify_timeout);
    tracing::info!("  cached:  {}", config.cache_vk);

    let keys = KeySource::new(config.vk_path.clone(), config.cache_vk)
        .await
        .context("failed to load verification key")?;

    let state: SharedState = Arc::new(AppState {
        keys,
        verify_timeout: config.verify_timeout,
    });

    let router = api::router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!("listening on {}", config.listen_addr);
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
