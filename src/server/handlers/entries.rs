// src/server/handlers/entries.rs

//! Ingest handler for cookbook entries

use crate::entry::Entry;
use crate::server::handlers::error_response;
use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// Add an entry to the cookbook
///
/// POST /entry
///
/// The body is a tagged entry object; an unknown `type` tag is rejected by
/// JSON extraction before this handler runs.
pub async fn add_entry(
    State(state): State<Arc<ServerState>>,
    Json(entry): Json<Entry>,
) -> Response {
    info!("Ingest request: {}", entry.name());

    match state.store.add_entry(entry) {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({}))).into_response(),
        Err(e) => error_response(&e),
    }
}
