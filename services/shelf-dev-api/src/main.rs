use shelf_dev_api::{DevConfig, DevState, router};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = DevConfig::from_env()?;
    if config.token.is_none() {
        info!("no dev token configured; accepting any Authorization value");
    }

    let app = router(DevState::new(config.token.clone()));

    info!("shelf-dev-api listening on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", err);
    }
    info!("shutting down");
}
