// src/server/mod.rs

//! HTTP surface for the cookbook
//!
//! A small axum server wrapped around the core:
//! - `POST /entry` ingests an ingredient or recipe
//! - `GET /summary?name=...` resolves a recipe into base-ingredient totals
//! - `POST /parse` normalizes a handwritten recipe name
//! - `GET /health` liveness probe
//!
//! The server owns a `CookbookStore`; all cookbook semantics live in the
//! core modules, the handlers only translate errors onto status codes.

mod handlers;
mod routes;

pub use routes::create_router;

use crate::persist::CookbookFile;
use crate::store::CookbookStore;
use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the cookbook JSON file
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            data_path: PathBuf::from("database.json"),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub store: CookbookStore,
}

impl ServerState {
    pub fn new(store: CookbookStore) -> Self {
        Self { store }
    }
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting larder server on {}", config.bind_addr);
    tracing::info!("Cookbook file: {:?}", config.data_path);

    let store = CookbookStore::with_persistence(CookbookFile::new(&config.data_path))?;
    tracing::info!("Loaded {} cookbook entries", store.len());

    let state = Arc::new(ServerState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Larder is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
