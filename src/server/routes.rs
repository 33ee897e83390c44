// src/server/routes.rs

//! Axum router configuration for the cookbook server

use crate::server::handlers::{entries, parse, summary};
use crate::server::ServerState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Name normalization
        .route("/parse", post(parse::parse_name))
        // Ingest
        .route("/entry", post(entries::add_entry))
        // Resolution
        .route("/summary", get(summary::get_summary))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
