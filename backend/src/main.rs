//! Backend entry-point: loads the dataset and serves the search API.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use search_backend::inbound::http::health::HealthState;
use search_backend::outbound::dataset::DatasetUserStore;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| eyre!("failed to load server settings: {e}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("invalid SEARCH_BIND_ADDR")?;
    let dataset_path = settings.dataset_path();

    let store = DatasetUserStore::open(&dataset_path)
        .map_err(|e| eyre!("failed to load dataset {}: {e}", dataset_path.display()))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, Arc::new(store)))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    info!(%bind_addr, "search server listening");
    server.await.wrap_err("server terminated abnormally")
}
