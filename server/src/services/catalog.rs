//! Catalog reads and writes against the backend's REST data API.
//!
//! DESIGN
//! ======
//! Query construction and response parsing are pure functions so the wire
//! contract (projection, ordering, count headers) is testable without a
//! network. Ordering is always requested from the backend; rows are returned
//! exactly as received.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use async_trait::async_trait;
use episodes_ui::net::catalog::{CatalogError, CatalogSource};
use episodes_ui::net::types::{CatalogStats, NewEpisode, Playlist, SeriesOption};
use reqwest::header::{AUTHORIZATION, CONTENT_RANGE};
use serde::de::DeserializeOwned;

use crate::config::SupabaseConfig;

const SERIES_QUERY: &str = "series?select=id,title&order=title.asc";
const PLAYLISTS_QUERY: &str = "playlists?select=id,title,description,cover_url&order=title.asc";
const EPISODES_TABLE: &str = "episodes";

pub(crate) fn rest_base(project_url: &str) -> String {
    format!("{}/rest/v1", project_url.trim_end_matches('/'))
}

pub(crate) fn series_url(rest: &str) -> String {
    format!("{rest}/{SERIES_QUERY}")
}

pub(crate) fn playlists_url(rest: &str) -> String {
    format!("{rest}/{PLAYLISTS_QUERY}")
}

pub(crate) fn count_url(rest: &str, table: &str) -> String {
    format!("{rest}/{table}?select=id")
}

/// Total from a `Content-Range` header such as `0-24/3573` or `*/0`.
pub(crate) fn parse_content_range_total(raw: &str) -> Option<u64> {
    raw.rsplit_once('/').and_then(|(_, total)| total.trim().parse().ok())
}

pub(crate) fn decode_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}

// =============================================================================
// SUPABASE CATALOG
// =============================================================================

pub struct SupabaseCatalog {
    http: reqwest::Client,
    rest: String,
    anon_key: String,
}

impl SupabaseCatalog {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &SupabaseConfig) -> Self {
        Self { http, rest: rest_base(&config.url), anon_key: config.anon_key.clone() }
    }

    async fn get_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, CatalogError> {
        let response = self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(CatalogError::Status { status, body });
        }
        decode_rows(&body)
    }

    async fn count(&self, table: &str) -> Result<u64, CatalogError> {
        let response = self
            .http
            .head(count_url(&self.rest, table))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(CatalogError::Status { status, body: String::new() });
        }
        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| CatalogError::Parse(format!("{table}: missing or malformed Content-Range")))
    }
}

#[async_trait]
impl CatalogSource for SupabaseCatalog {
    async fn list_series(&self) -> Result<Vec<SeriesOption>, CatalogError> {
        self.get_rows(&series_url(&self.rest)).await
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
        self.get_rows(&playlists_url(&self.rest)).await
    }

    async fn catalog_stats(&self) -> Result<CatalogStats, CatalogError> {
        let (series, episodes, playlists, profiles) = tokio::try_join!(
            self.count("series"),
            self.count(EPISODES_TABLE),
            self.count("playlists"),
            self.count("profiles"),
        )?;
        Ok(CatalogStats { series, episodes, playlists, profiles })
    }

    async fn create_episode(&self, access_token: &str, episode: &NewEpisode) -> Result<(), CatalogError> {
        let response = self
            .http
            .post(format!("{}/{EPISODES_TABLE}", self.rest))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .header("Prefer", "return=minimal")
            .json(episode)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(CatalogError::Status { status, body })
    }
}

// =============================================================================
// UNCONFIGURED
// =============================================================================

/// Stand-in used when no backend is configured; every call fails.
pub struct UnconfiguredCatalog;

#[async_trait]
impl CatalogSource for UnconfiguredCatalog {
    async fn list_series(&self) -> Result<Vec<SeriesOption>, CatalogError> {
        Err(CatalogError::Unconfigured)
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
        Err(CatalogError::Unconfigured)
    }

    async fn catalog_stats(&self) -> Result<CatalogStats, CatalogError> {
        Err(CatalogError::Unconfigured)
    }

    async fn create_episode(&self, _access_token: &str, _episode: &NewEpisode) -> Result<(), CatalogError> {
        Err(CatalogError::Unconfigured)
    }
}
