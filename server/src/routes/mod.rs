//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the crawler documents, the auth proxy endpoints, and the
//! Leptos server functions, then stitches them with Leptos SSR rendering under
//! a single Axum router. Static assets built by cargo-leptos live under `/pkg`.

pub mod auth;
pub mod seo;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use episodes_ui::net::catalog::SharedCatalog;
use leptos::prelude::*;
use leptos_axum::{
    LeptosRoutes, generate_route_list, handle_server_fns_with_context, render_app_to_stream_with_context,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Context every render and server-function call receives.
pub(crate) fn app_context(catalog: SharedCatalog) -> impl Fn() + Clone + Send + Sync + 'static {
    move || provide_context(catalog.clone())
}

/// Non-page routes: crawler documents, auth proxy, server functions, health.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/robots.txt", get(seo::robots_txt))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/{*fn_name}", get(server_fn_handler).post(server_fn_handler))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn server_fn_handler(State(state): State<AppState>, req: Request<Body>) -> impl IntoResponse {
    handle_server_fns_with_context(app_context(state.catalog.clone()), req).await
}

/// Full site: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(site_router(state, conf.leptos_options))
}

/// Assemble the site for the given Leptos options. Unknown paths render the
/// app so the router fallback page answers them.
pub(crate) fn site_router(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(episodes_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, app_context(state.catalog.clone()), {
            let opts = leptos_options.clone();
            move || episodes_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let fallback = {
        let catalog = state.catalog.clone();
        let opts = leptos_options.clone();
        move |req: Request<Body>| render_fallback(catalog.clone(), opts.clone(), req)
    };

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn render_fallback(catalog: SharedCatalog, options: LeptosOptions, req: Request<Body>) -> Response {
    let handler = render_app_to_stream_with_context(app_context(catalog), move || {
        episodes_ui::app::shell(options.clone())
    });
    handler(req).await.into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
