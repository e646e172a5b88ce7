//! Handlers for the site surface around the API: the root banner, the
//! favicon, and the SPA fallback for unmatched routes.
//!
//! The fallback serves the SPA shell with a 404 status so client-side
//! routes deep-linked from a browser still load the application, while
//! crawlers and scripts see the miss. When no build output is present
//! the fallback degrades to a structured JSON error.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Root banner, useful as a quick liveness probe.
pub async fn root() -> &'static str {
    "API is running"
}

// ---------------------------------------------------------------------------
// GET /favicon.ico
// ---------------------------------------------------------------------------

/// Serve the favicon from the static build directory, or an empty 204
/// when the build has not been produced yet.
pub async fn favicon(State(state): State<AppState>) -> Response {
    let path = state.config.static_dir.join("favicon.ico");

    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "image/x-icon")],
            bytes,
        )
            .into_response(),
        Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}

// ---------------------------------------------------------------------------
// Fallback for unmatched routes
// ---------------------------------------------------------------------------

/// Serve the SPA shell for any route nothing else claimed.
pub async fn spa_fallback(State(state): State<AppState>) -> Response {
    let shell = state.config.static_dir.join("index.html");

    match tokio::fs::read_to_string(&shell).await {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Not Found",
                "message": "No matching route and no index.html present to serve.",
            })),
        )
            .into_response(),
    }
}
