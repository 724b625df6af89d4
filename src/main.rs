//! Academy API server binary

use academy::config::AppConfig;
use academy::server::{self, AppState};
use academy::storage::InMemoryStore;
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;

    let store = if std::env::var("ACADEMY_SEED").is_ok_and(|v| v == "1") {
        tracing::info!("Seeding demo data");
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    };

    let state = AppState {
        teachers: Arc::new(store.clone()),
        lessons: Arc::new(store),
        page_size: config.page_size,
    };

    server::serve(state, &config.bind_addr).await
}
