// src/server/handlers/parse.rs

//! Name normalization handler

use crate::normalize::normalize_name;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Request body for POST /parse
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub input: String,
}

/// Response for a successfully normalized name
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a handwritten recipe name
///
/// POST /parse
pub async fn parse_name(Json(request): Json<ParseRequest>) -> Response {
    match normalize_name(&request.input) {
        Some(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        None => {
            let body = serde_json::json!({
                "error": "unparseable",
                "message": "this string is cooked",
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}
