//! Catalog reads and writes exposed as Leptos server functions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build `Resource`s over these functions. During SSR the body runs
//! in-process against the `SharedCatalog` provided through context by the
//! server crate; after hydration the same calls travel over HTTP.
//!
//! ERROR HANDLING
//! ==============
//! Listing failures are logged here and surfaced as `ServerFnError`; pages fold
//! them into an empty list with [`or_empty`] so a broken backend never turns
//! into an error page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use super::types::{NewEpisode, Playlist, SeriesOption};

/// Errors produced by a catalog backend.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No backend URL/key was configured for this deployment.
    #[error("catalog backend not configured")]
    Unconfigured,

    /// The HTTP request to the backend failed.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("catalog returned status {status}")]
    Status { status: u16, body: String },

    /// The backend response body could not be decoded.
    #[error("catalog response parse failed: {0}")]
    Parse(String),
}

/// Read/write access to the remote catalog tables.
#[cfg(feature = "ssr")]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// All series projected to `{id, title}`, ordered by title ascending.
    async fn list_series(&self) -> Result<Vec<SeriesOption>, CatalogError>;

    /// All public playlists, ordered by title ascending.
    async fn list_playlists(&self) -> Result<Vec<Playlist>, CatalogError>;

    /// Exact row counts for the dashboard tables.
    async fn catalog_stats(&self) -> Result<crate::net::types::CatalogStats, CatalogError>;

    /// Insert an episode on behalf of the user owning `access_token`.
    async fn create_episode(&self, access_token: &str, episode: &NewEpisode) -> Result<(), CatalogError>;
}

/// Context handle the server crate provides to SSR and server functions.
#[cfg(feature = "ssr")]
pub type SharedCatalog = std::sync::Arc<dyn CatalogSource>;

/// Fold a listing result into its rows, or an empty list on failure.
pub fn or_empty<T, E>(result: Result<Vec<T>, E>) -> Vec<T> {
    result.unwrap_or_default()
}

#[cfg(feature = "ssr")]
fn catalog_from_context() -> Result<SharedCatalog, ServerFnError> {
    use_context::<SharedCatalog>().ok_or_else(|| ServerFnError::new(CatalogError::Unconfigured))
}

#[cfg(feature = "ssr")]
fn listing_failed(what: &'static str, err: CatalogError) -> ServerFnError {
    tracing::warn!(error = %err, what, "catalog listing failed; rendering empty list");
    ServerFnError::new(err)
}

/// `select id, title from series order by title asc`.
#[server]
pub async fn list_series() -> Result<Vec<SeriesOption>, ServerFnError> {
    let catalog = catalog_from_context()?;
    catalog.list_series().await.map_err(|e| listing_failed("series", e))
}

#[server]
pub async fn list_playlists() -> Result<Vec<Playlist>, ServerFnError> {
    let catalog = catalog_from_context()?;
    catalog.list_playlists().await.map_err(|e| listing_failed("playlists", e))
}

#[server]
pub async fn catalog_stats() -> Result<crate::net::types::CatalogStats, ServerFnError> {
    let catalog = catalog_from_context()?;
    catalog.catalog_stats().await.map_err(|e| listing_failed("stats", e))
}

/// Insert an episode using the caller's access-token cookie.
///
/// The backend's row-level security decides whether the caller may write;
/// this function only requires that a token is present.
#[server]
pub async fn create_episode(episode: NewEpisode) -> Result<(), ServerFnError> {
    use axum_extra::extract::CookieJar;

    use super::types::ACCESS_TOKEN_COOKIE;

    episode.check().map_err(ServerFnError::new)?;

    let jar: CookieJar = leptos_axum::extract().await?;
    let token = jar
        .get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ServerFnError::new("Sign in to add episodes."))?;

    let catalog = catalog_from_context()?;
    catalog.create_episode(&token, &episode).await.map_err(|e| {
        tracing::error!(error = %e, series_id = %episode.series_id, "episode insert failed");
        ServerFnError::new(e)
    })?;

    tracing::info!(series_id = %episode.series_id, number = episode.episode_number, "episode created");
    Ok(())
}
