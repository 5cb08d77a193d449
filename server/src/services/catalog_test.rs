use std::collections::HashMap;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use super::*;

// =============================================================================
// Query construction
// =============================================================================

#[test]
fn rest_base_trims_trailing_slash() {
    assert_eq!(rest_base("https://abc.supabase.co/"), "https://abc.supabase.co/rest/v1");
    assert_eq!(rest_base("https://abc.supabase.co"), "https://abc.supabase.co/rest/v1");
}

#[test]
fn series_query_projects_id_title_ordered_by_title() {
    let url = series_url("https://abc.supabase.co/rest/v1");
    assert_eq!(url, "https://abc.supabase.co/rest/v1/series?select=id,title&order=title.asc");
}

#[test]
fn playlists_query_is_ordered_by_title() {
    let url = playlists_url("http://x/rest/v1");
    assert!(url.starts_with("http://x/rest/v1/playlists?"));
    assert!(url.ends_with("&order=title.asc"));
}

#[test]
fn count_url_selects_id_only() {
    assert_eq!(count_url("http://x/rest/v1", "profiles"), "http://x/rest/v1/profiles?select=id");
}

// =============================================================================
// Response parsing
// =============================================================================

#[test]
fn content_range_total_parses_ranged_and_empty() {
    assert_eq!(parse_content_range_total("0-9/42"), Some(42));
    assert_eq!(parse_content_range_total("*/0"), Some(0));
    assert_eq!(parse_content_range_total("0-9/*"), None);
    assert_eq!(parse_content_range_total("garbage"), None);
}

#[test]
fn decode_rows_keeps_backend_order() {
    let rows: Vec<SeriesOption> =
        decode_rows(r#"[{"id":"b","title":"Beta"},{"id":"a","title":"Alpha"}]"#).unwrap();
    let titles: Vec<_> = rows.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Beta", "Alpha"]);
}

#[test]
fn decode_rows_reports_parse_error() {
    let err = decode_rows::<SeriesOption>("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

// =============================================================================
// Against a local fake REST backend
// =============================================================================

const ANON: &str = "anon-test-key";

async fn table(Path(table): Path<String>, Query(q): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
    if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some(ANON) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let counting = headers.get("Prefer").and_then(|v| v.to_str().ok()) == Some("count=exact");
    if counting {
        let total = match table.as_str() {
            "series" => "0-1/2",
            "episodes" => "0-24/37",
            "playlists" => "*/0",
            "profiles" => "0-0/5",
            _ => return StatusCode::NOT_FOUND.into_response(),
        };
        return ([("Content-Range", total)], "").into_response();
    }
    match table.as_str() {
        "series" => {
            let mut rows = vec![("s2", "Bravo"), ("s1", "Alpha")];
            if q.get("order").map(String::as_str) == Some("title.asc") {
                rows.sort_by_key(|(_, title)| *title);
            }
            let body: Vec<_> = rows.into_iter().map(|(id, title)| serde_json::json!({"id": id, "title": title})).collect();
            axum::Json(body).into_response()
        }
        "playlists" => axum::Json(serde_json::json!([
            {"id": "p1", "title": "Favorites", "description": null, "cover_url": null}
        ]))
        .into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
    }
}

async fn insert_episode(headers: HeaderMap, axum::Json(body): axum::Json<serde_json::Value>) -> StatusCode {
    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    if bearer != Some("Bearer user-token") || body["series_id"] != "s1" {
        return StatusCode::FORBIDDEN;
    }
    StatusCode::CREATED
}

async fn spawn_backend() -> SupabaseCatalog {
    let app = Router::new()
        .route("/rest/v1/episodes", post(insert_episode))
        .route("/rest/v1/{table}", get(table));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let config = SupabaseConfig { url: format!("http://{addr}"), anon_key: ANON.into() };
    SupabaseCatalog::new(reqwest::Client::new(), &config)
}

fn sample_episode() -> NewEpisode {
    NewEpisode {
        series_id: "s1".into(),
        title: "Pilot".into(),
        episode_number: 1,
        video_url: "https://cdn.hentaiclick.tv/v/1.mp4".into(),
        thumbnail_url: None,
    }
}

#[tokio::test]
async fn list_series_returns_rows_in_title_order() {
    let catalog = spawn_backend().await;
    let rows = catalog.list_series().await.unwrap();
    let titles: Vec<_> = rows.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Alpha", "Bravo"]);
}

#[tokio::test]
async fn list_playlists_decodes_optional_fields() {
    let catalog = spawn_backend().await;
    let rows = catalog.list_playlists().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, None);
}

#[tokio::test]
async fn catalog_stats_reads_content_range_totals() {
    let catalog = spawn_backend().await;
    let stats = catalog.catalog_stats().await.unwrap();
    assert_eq!(stats, CatalogStats { series: 2, episodes: 37, playlists: 0, profiles: 5 });
}

#[tokio::test]
async fn create_episode_forwards_user_token() {
    let catalog = spawn_backend().await;
    catalog.create_episode("user-token", &sample_episode()).await.unwrap();
}

#[tokio::test]
async fn create_episode_surfaces_rejection_status() {
    let catalog = spawn_backend().await;
    let err = catalog.create_episode("someone-else", &sample_episode()).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 403, .. }));
}

#[tokio::test]
async fn wrong_key_is_a_status_error() {
    let mut catalog = spawn_backend().await;
    catalog.anon_key = "wrong".into();
    let err = catalog.list_series().await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 401, .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error() {
    let config = SupabaseConfig { url: "http://127.0.0.1:1".into(), anon_key: ANON.into() };
    let catalog = SupabaseCatalog::new(reqwest::Client::new(), &config);
    let err = catalog.list_series().await.unwrap_err();
    assert!(matches!(err, CatalogError::Request(_)));
}

#[tokio::test]
async fn unconfigured_catalog_fails_every_call() {
    let catalog = UnconfiguredCatalog;
    assert!(matches!(catalog.list_series().await, Err(CatalogError::Unconfigured)));
    assert!(matches!(catalog.catalog_stats().await, Err(CatalogError::Unconfigured)));
    assert!(matches!(
        catalog.create_episode("t", &sample_episode()).await,
        Err(CatalogError::Unconfigured)
    ));
}
