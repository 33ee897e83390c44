// src/server/handlers/mod.rs

//! Request handlers for the cookbook server

pub mod entries;
pub mod parse;
pub mod summary;

use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Map a cookbook error onto an HTTP response
///
/// `NotFound` maps to 404; every other taxonomy error is a client mistake
/// and maps to 400.
pub(crate) fn error_response(err: &Error) -> Response {
    let status = match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };

    let body = serde_json::json!({
        "error": err.kind(),
        "message": format!("{}", err),
    });
    (status, Json(body)).into_response()
}
