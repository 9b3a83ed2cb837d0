//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the health probe, the same-origin
//! proxy to the upstream REST API, and Leptos SSR for every client route.
//! Compiled WASM, JS and CSS are served from the site root's `/pkg`.

use std::path::PathBuf;

use axum::extract::State;
use axum::routing::{any, get};
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use novademy_client::app::{App, shell};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

/// Health probe plus the upstream proxy under the configured prefix.
pub fn api_routes(state: AppState) -> Router {
    let prefix = state.config.proxy_prefix.clone();
    Router::new()
        .route("/healthz", get(healthz))
        .route(&prefix, any(proxy::forward))
        .route(&format!("{prefix}/{{*path}}"), any(proxy::forward))
        .with_state(state)
}

/// Full application: API routes, Leptos SSR and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    upstream: String,
}

async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", upstream: state.config.upstream_url.clone() })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
