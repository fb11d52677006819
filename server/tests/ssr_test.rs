//! SSR integration tests
//!
//! These tests verify that server-side rendering works correctly
//! through the same router the binary serves.

#![recursion_limit = "512"]
#![allow(clippy::unwrap_used)]

use app::api_impl::TourContext;
use app::config::MapSettings;
use app::stops::StopRegistry;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use server_lib::router::{AppState, build_router, default_leptos_options};
use tower::util::ServiceExt;

fn test_state() -> AppState {
    AppState {
        leptos_options: default_leptos_options(),
        tour: TourContext {
            stops: StopRegistry::builtin(),
            map: MapSettings::default(),
            source_language: "en".to_string(),
        },
        translator: None,
    }
}

async fn get_body(uri: &str) -> (StatusCode, String) {
    let app = build_router(test_state());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// The tour page renders without panicking, even without a translator
#[tokio::test]
async fn test_tour_page_ssr_no_panic() {
    let (status, body) = get_body("/").await;

    assert_eq!(status, StatusCode::OK, "Expected 200 OK for / page SSR");
    assert!(body.contains("A Tour of India"));
}

#[tokio::test]
async fn test_tour_page_includes_map_assets() {
    let (_, body) = get_body("/").await;

    assert!(body.contains("leaflet.js"));
    assert!(body.contains("/assets/tour_map.js"));
}

#[tokio::test]
async fn test_tour_page_renders_first_stop() {
    let (_, body) = get_body("/").await;

    assert!(body.contains("Delhi: Capital of India."));
    assert!(body.contains("Stop 1 of 5"));
}

#[tokio::test]
async fn test_missing_asset_returns_404() {
    let (status, _) = get_body("/pkg/does-not-exist.wasm").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
