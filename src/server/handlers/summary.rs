// src/server/handlers/summary.rs

//! Resolution handler: flatten a recipe into its summary

use crate::resolver;
use crate::server::handlers::error_response;
use crate::server::ServerState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Query string for GET /summary
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub name: String,
}

/// Resolve a recipe into base-ingredient totals and aggregate cook time
///
/// GET /summary?name=<recipe>
pub async fn get_summary(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SummaryParams>,
) -> Response {
    info!("Summary request: {}", params.name);

    let snapshot = state.store.snapshot();
    match resolver::resolve(&snapshot, &params.name) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(&e),
    }
}
