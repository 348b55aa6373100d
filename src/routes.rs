//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server holds no application state: it renders the Leptos app for every
//! client route, serves the hydration bundle from `/pkg`, and answers health
//! probes. Posts and sessions live in the hosted backend, which the browser
//! talks to directly using the config embedded in the shell.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::BackendConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(backend: BackendConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(backend.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let pkg_dir = pkg_dir(Path::new(&*leptos_options.site_root), &leptos_options.site_pkg_dir);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the compiled WASM, JS glue, and stylesheet.
fn pkg_dir(site_root: &Path, site_pkg_dir: &str) -> PathBuf {
    site_root.join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
