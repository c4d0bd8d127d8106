//! Map API Server Binary
//!
//! Loads the boundary and statistics files, then serves the map API.
//!
//! # Usage
//!
//! ```bash
//! DATA_DIR=./data PORT=5000 cargo run --bin map-server
//! ```
//!
//! # Environment Variables
//!
//! - `MAP_SERVER_CONFIG`: Path to a TOML config file (default: `server.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `DATA_DIR`: Directory holding the four data files (default: data)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS allow-list
//! - `DISPLAY_TYPE_SEED`: Make `displayType` deterministic
//! - `DISPLAY_TYPE`: Use one chart type (`pieChart` or `barGraph`) for every district
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bihar_map_api::config::ServerConfig;
use bihar_map_api::http::{create_router, AppState};
use bihar_map_api::store::DataStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting map API server");

    let config = ServerConfig::from_env()?;

    // Loading finishes before the listener is bound.
    let paths = config.data_paths();
    let store = DataStore::load(&paths);
    if !store.is_complete() {
        warn!("Some datasets failed to load; dependent endpoints will return 500");
    }

    let state = AppState::new(store)
        .with_display(config.display_type_source())
        .with_allowed_origins(config.allowed_origins.clone());
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
