//! CORS Proxy Binary
//!
//! Relays every request to a fixed backend origin and adds CORS headers.
//!
//! # Environment Variables
//!
//! - `MAP_SERVER_CONFIG`: Path to a TOML config file (`[proxy]` section)
//! - `PROXY_HOST`: Listen host (default: 0.0.0.0)
//! - `PROXY_PORT`: Listen port (default: 3001)
//! - `PROXY_BACKEND_URL`: Backend origin (default: https://yuvasaathi-backend-v2.vercel.app)
//! - `PROXY_ALLOWED_ORIGIN`: Value of `Access-Control-Allow-Origin`
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bihar_map_api::config::ProxyConfig;
use bihar_map_api::proxy::{create_proxy_router, ProxyState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ProxyConfig::from_env()?;
    let state = ProxyState::new(&config)?;
    let app = create_proxy_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!(backend = %config.backend_origin(), "Proxy listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
