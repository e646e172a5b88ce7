//! Route tree and middleware assembly.

pub mod birds;
pub mod health;

use std::time::Duration;

use axum::handler::Handler;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers::site;
use crate::middleware::cache;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /birds           list, create
/// /birds/{id}      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/birds", birds::router())
}

/// Build the complete application router with all middleware layers.
///
/// Route hierarchy:
///
/// ```text
/// /                root banner (plain text)
/// /favicon.ico     favicon, 204 when the build is absent
/// /health          service and database health
/// /api/birds...    bird resource
/// <unmatched>      static files from the build dir, then the SPA shell
/// ```
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);

    let request_id_header = HeaderName::from_static("x-request-id");

    // Unmatched paths go through the static file service; whatever the
    // build directory cannot satisfy (any method) lands on the SPA
    // fallback handler.
    let static_site = ServeDir::new(&state.config.static_dir)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(site::spa_fallback.with_state(state.clone()));

    Router::new()
        .route("/", get(site::root))
        .route("/favicon.ico", get(site::favicon))
        .merge(health::router())
        .nest("/api", api_routes())
        .fallback_service(static_site)
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Cache-Control tiering on every outgoing response, panic
        // recoveries included.
        .layer(axum::middleware::from_fn(cache::set_cache_control))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics at startup if any configured origin is invalid, which is the
/// desired behaviour -- we want misconfiguration to fail fast.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
