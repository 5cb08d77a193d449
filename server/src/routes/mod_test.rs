use std::sync::Arc;

use episodes_ui::net::catalog::{list_series, or_empty};
use episodes_ui::net::types::SeriesOption;
use futures::executor::block_on;

use super::*;
use crate::state::test_helpers::MockCatalog;

fn series(id: &str, title: &str) -> SeriesOption {
    SeriesOption { id: id.to_owned(), title: title.to_owned() }
}

#[test]
fn server_functions_read_the_provided_catalog() {
    let rows = vec![series("1", "Alpha"), series("2", "Bravo")];
    let catalog: SharedCatalog = Arc::new(MockCatalog { series: Some(rows.clone()) });
    let owner = Owner::new();
    let listed = owner.with(|| {
        app_context(catalog)();
        block_on(list_series())
    });
    assert_eq!(listed.unwrap(), rows);
}

#[test]
fn failing_catalog_degrades_to_empty_list() {
    let catalog: SharedCatalog = Arc::new(MockCatalog { series: None });
    let owner = Owner::new();
    let listed = owner.with(|| {
        app_context(catalog)();
        block_on(list_series())
    });
    assert!(listed.is_err());
    assert!(or_empty(listed).is_empty());
}

#[test]
fn missing_catalog_context_degrades_to_empty_list() {
    let owner = Owner::new();
    let listed = owner.with(|| block_on(list_series()));
    assert!(or_empty(listed).is_empty());
}

// =============================================================================
// Full site router
// =============================================================================

mod site {
    use axum::http::{Request, header};
    use episodes_ui::layouts::playlists::PLAYLISTS_DESCRIPTION;
    use tower::ServiceExt;

    use super::*;
    use crate::state::test_helpers::{mock_identity, test_app_state_with};

    fn site(catalog: MockCatalog) -> Router {
        let _ = any_spawner::Executor::init_tokio();
        let options = LeptosOptions::builder().output_name("episodes").build();
        site_router(test_app_state_with(Arc::new(catalog), mock_identity(false)), options)
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_page() {
        let (status, _, body) = get_page(site(MockCatalog::default()), "/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains(r#"href="/""#));
        assert!(body.contains("This page could not be found."));
    }

    #[tokio::test]
    async fn new_episode_page_is_not_cached() {
        let catalog = MockCatalog { series: Some(vec![series("1", "Alpha")]) };
        let (status, headers, _) = get_page(site(catalog), "/admin/episodes/new").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn new_episode_page_renders_form_when_catalog_fails() {
        let (status, _, body) = get_page(site(MockCatalog { series: None }), "/admin/episodes/new").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"class="episode-form""#));
        assert_eq!(body.matches("<option").count(), 1);
        assert!(body.contains("No series available"));
    }

    #[tokio::test]
    async fn new_episode_page_renders_form_for_zero_rows() {
        let (_, _, body) = get_page(site(MockCatalog { series: Some(Vec::new()) }), "/admin/episodes/new").await;
        assert!(body.contains(r#"class="episode-form""#));
        assert_eq!(body.matches("<option").count(), 1);
    }

    #[tokio::test]
    async fn new_episode_page_offers_series_in_backend_order() {
        let catalog = MockCatalog { series: Some(vec![series("1", "Alpha"), series("2", "Bravo")]) };
        let (_, _, body) = get_page(site(catalog), "/admin/episodes/new").await;
        assert_eq!(body.matches("<option").count(), 3);
        assert!(body.find("Alpha").unwrap() < body.find("Bravo").unwrap());
    }

    #[tokio::test]
    async fn home_page_is_indexable() {
        let (status, _, body) = get_page(site(MockCatalog::default()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"aria-label="Main content""#));
        assert!(!body.contains("noindex"));
    }

    #[tokio::test]
    async fn profile_page_is_excluded_from_indexing() {
        let (status, _, body) = get_page(site(MockCatalog::default()), "/profile").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"aria-label="Main content""#));
        assert!(body.contains(r#"content="noindex, nofollow""#));
    }

    #[tokio::test]
    async fn playlists_layout_sets_title_and_description() {
        let (status, _, body) = get_page(site(MockCatalog::default()), "/playlists").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Playlists | HentaiClick</title>"));
        assert!(body.contains(PLAYLISTS_DESCRIPTION));
        assert!(!body.contains("noindex"));
    }
}
