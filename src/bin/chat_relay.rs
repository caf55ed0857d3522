use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use dayyanos_lib::relay::{router, RelayConfig, RelayState};

#[tokio::main]
async fn main() -> Result<()> {
    dayyanos_lib::init_tracing();
    let config = RelayConfig::parse();

    let addr = config
        .bind_addr()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .context("failed to build HTTP client")?;

    tracing::info!("[Relay] upstream {} (model {})", config.upstream_url, config.model);
    let app = router(Arc::new(RelayState::new(config, http)));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("[Relay] listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("[Relay] shutting down");
        })
        .await
        .context("relay server failed")?;
    Ok(())
}
