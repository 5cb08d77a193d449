//! `GET /robots.txt` and `GET /sitemap.xml`.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::seo::robots::robots_policy;
use crate::seo::sitemap::render_sitemap;
use crate::state::AppState;

pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let body = robots_policy(Some(&state.config.site_url)).to_text();
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml")], render_sitemap(&state.config.site_url))
}
