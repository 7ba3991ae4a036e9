//! Server settings loaded via OrthoConfig and the resolved server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use search_backend::domain::ports::UserStore;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn default_dataset_path() -> PathBuf {
    user_dataset::bundled_fixture_path()
}

/// Layered settings for the HTTP server (CLI, `SEARCH_*` environment, file).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEARCH")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Path to the JSON dataset loaded at startup.
    pub dataset_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Return the configured dataset path, falling back to the bundled fixture.
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(default_dataset_path)
    }
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<dyn UserStore>,
}

impl ServerConfig {
    /// Construct a server configuration around a loaded user store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: Arc<dyn UserStore>) -> Self {
        Self { bind_addr, store }
    }
}
