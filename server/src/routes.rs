//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos shell and serves the compiled `/pkg`
//! assets. Every `/api` call goes from the browser straight to the chat
//! backend named by `ServerConfig::api_base_url`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::ClientConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Routes that do not depend on the Leptos build.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application: health check, SSR pages, static assets.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let client_config = ClientConfig::new(&config.api_base_url);

    let shell = {
        let opts = leptos_options.clone();
        move || client::app::shell(opts.clone(), client_config.clone())
    };

    // Unknown paths still render the app so the router shows its not-found view.
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, shell.clone())
        .fallback(render_app_to_stream(shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .nest_service(
            &format!("/{}", leptos_options.site_pkg_dir),
            ServeDir::new(site_root_path.join(&*leptos_options.site_pkg_dir)),
        )
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
