//! Directory API server binary
//!
//! Boots the listing API over the default in-memory store, seeded with the
//! fixed dataset. Configuration comes from an optional `directory.yaml` next
//! to the working directory, overridden by `DIRECTORY_HOST`/`DIRECTORY_PORT`.

use anyhow::Result;
use company_directory::config::ServerConfig;
use company_directory::core::service::ListingService;
use company_directory::seed::seed;
use company_directory::server::{build_router, AppState};
use company_directory::storage::InMemoryCompanyStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "directory.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("company_directory=info,tower_http=info")),
        )
        .init();

    let config = if std::path::Path::new(CONFIG_FILE).exists() {
        ServerConfig::from_yaml_file(CONFIG_FILE)?
    } else {
        ServerConfig::default()
    }
    .with_env_overrides();

    let store = Arc::new(InMemoryCompanyStore::new());
    let seeded = seed(store.as_ref()).await?;
    tracing::info!(seeded, "store ready");

    let state = AppState::new(ListingService::new(store));
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "directory API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
