//! HTTP route tests
//!
//! Drives the full router through `axum-test` with in-process row sources:
//! - envelope shape and status codes
//! - featured pick, filtering and categories over normalized rows
//! - modal vs ambient playback resolution
//! - static fallback when the source fails

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use reel_portfolio::{
    catalog::VideoCatalog,
    config::Config,
    errors::{SourceError, SourceResult},
    sources::RowSource,
    web::{AppState, router},
};

struct StaticRows(Vec<Vec<String>>);

#[async_trait]
impl RowSource for StaticRows {
    async fn fetch_rows(&self) -> SourceResult<Vec<Vec<String>>> {
        Ok(self.0.clone())
    }

    fn source_type(&self) -> &'static str {
        "static_rows"
    }
}

struct FailingSource;

#[async_trait]
impl RowSource for FailingSource {
    async fn fetch_rows(&self) -> SourceResult<Vec<Vec<String>>> {
        Err(SourceError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        })
    }

    fn source_type(&self) -> &'static str {
        "failing"
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn sheet_rows() -> Vec<Vec<String>> {
    vec![
        row(&["https://vimeo.com/111", "Vimeo Piece", "", "Acme", "Commercial"]),
        row(&[
            "https://youtu.be/hero123",
            "Hero Piece",
            "",
            "Atlin",
            "Commercial, Music Video",
            "16:9",
        ]),
        row(&["", "Dropped"]),
        row(&[
            "https://www.instagram.com/reel/R1/",
            "Reel",
            "",
            "",
            "Social Media",
            "9:16",
            "",
            "",
            "Premiere Pro, Unknown Tool",
        ]),
        row(&["/videos/local.mp4", "Local"]),
    ]
}

fn server_with(source: Arc<dyn RowSource>) -> TestServer {
    let catalog = Arc::new(VideoCatalog::new(source, Duration::from_secs(60)));
    let state = AppState::new(Config::default(), catalog);
    TestServer::new(router(state)).unwrap()
}

fn sheet_server() -> TestServer {
    server_with(Arc::new(StaticRows(sheet_rows())))
}

#[tokio::test]
async fn health_and_liveness() {
    let server = sheet_server();

    let health = server.get("/health").await;
    health.assert_status_ok();
    let body: Value = health.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");

    let live = server.get("/live").await;
    live.assert_status_ok();
    assert_eq!(live.text(), "OK");
}

#[tokio::test]
async fn portfolio_has_featured_and_all_videos() {
    let server = sheet_server();

    let body: Value = server.get("/api/v1/portfolio").await.json();
    let data = &body["data"];
    assert_eq!(data["source"], "remote");
    assert_eq!(data["featured"]["title"], "Hero Piece");
    assert_eq!(data["featured"]["id"], "2");
    assert_eq!(data["videos"].as_array().unwrap().len(), 4);
    assert_eq!(data["categories"][0], "All");
}

#[tokio::test]
async fn seeded_portfolio_order_is_reproducible() {
    let server = sheet_server();

    let first: Value = server
        .get("/api/v1/portfolio")
        .add_query_param("seed", 99)
        .await
        .json();
    let second: Value = server
        .get("/api/v1/portfolio")
        .add_query_param("seed", 99)
        .await
        .json();
    assert_eq!(first["data"]["videos"], second["data"]["videos"]);
}

#[tokio::test]
async fn videos_are_listed_in_canonical_order_and_filterable() {
    let server = sheet_server();

    let all: Value = server.get("/api/v1/videos").await.json();
    let ids: Vec<&str> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);

    let commercial: Value = server
        .get("/api/v1/videos")
        .add_query_param("tag", "Commercial")
        .await
        .json();
    assert_eq!(commercial["data"].as_array().unwrap().len(), 2);

    let explicit_all: Value = server
        .get("/api/v1/videos")
        .add_query_param("tag", "All")
        .await
        .json();
    assert_eq!(explicit_all["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn normalized_fields_reach_the_wire() {
    let server = sheet_server();

    let body: Value = server.get("/api/v1/videos/3").await.json();
    let video = &body["data"]["video"];
    assert_eq!(video["aspectRatio"], "9:16");
    assert_eq!(video["thumbnail"], "https://www.instagram.com/p/R1/media/?size=l");
    assert_eq!(video["software"][0]["name"], "Premiere Pro");
    assert_eq!(video["software"][1]["logo"], "");
    assert!(video.get("client").is_none());
}

#[tokio::test]
async fn video_detail_uses_modal_playback() {
    let server = sheet_server();

    let body: Value = server.get("/api/v1/videos/1").await.json();
    let playback = &body["data"]["playback"];
    assert_eq!(playback["kind"], "providerEmbed");
    assert_eq!(playback["provider"], "vimeo");
    assert_eq!(playback["url"], "https://player.vimeo.com/video/111?autoplay=1");

    let local: Value = server.get("/api/v1/videos/4").await.json();
    assert_eq!(local["data"]["playback"]["kind"], "localMedia");
    assert_eq!(local["data"]["playback"]["path"], "/videos/local.mp4");
}

#[tokio::test]
async fn unknown_video_is_404_envelope() {
    let server = sheet_server();

    let response = server.get("/api/v1/videos/42").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn hero_uses_ambient_playback() {
    let server = sheet_server();

    let body: Value = server.get("/api/v1/hero").await.json();
    let playback = &body["data"]["playback"];
    assert_eq!(body["data"]["video"]["client"], "Atlin");
    assert_eq!(playback["provider"], "youtube");
    assert_eq!(playback["player"]["videoId"], "hero123");
    assert!(
        playback["url"]
            .as_str()
            .unwrap()
            .contains("mute=1&loop=1&playlist=hero123")
    );
}

#[tokio::test]
async fn hero_without_featured_client_is_empty() {
    let server = server_with(Arc::new(StaticRows(vec![row(&["https://vimeo.com/1", "Solo"])])));

    let body: Value = server.get("/api/v1/hero").await.json();
    assert_eq!(body["success"], true);
    assert!(body["data"]["video"].is_null());
    assert!(body["data"]["playback"].is_null());
}

#[tokio::test]
async fn categories_endpoint() {
    let server = sheet_server();

    let body: Value = server.get("/api/v1/categories").await.json();
    assert_eq!(
        body["data"],
        serde_json::json!(["All", "Commercial", "Music Video", "Social Media"])
    );
}

#[tokio::test]
async fn failing_source_serves_fallback_dataset() {
    let server = server_with(Arc::new(FailingSource));

    let body: Value = server.get("/api/v1/portfolio").await.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["source"], "fallback");
    assert!(!body["data"]["videos"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["featured"]["client"], "Atlin");
}

#[tokio::test]
async fn embed_endpoint_resolves_urls() {
    let server = sheet_server();

    let body: Value = server
        .get("/api/v1/embed")
        .add_query_param("url", "https://drive.google.com/file/d/F1/view")
        .add_query_param("mode", "ambient")
        .await
        .json();
    let data = &body["data"];
    assert_eq!(
        data["playback"]["url"],
        "https://drive.google.com/file/d/F1/preview?autoplay=1&loop=1"
    );
    assert_eq!(data["thumbnail"], "https://drive.google.com/thumbnail?id=F1&sz=w1000");
    assert_eq!(
        data["directMediaUrl"],
        "https://drive.google.com/uc?export=download&id=F1"
    );

    let passthrough: Value = server
        .get("/api/v1/embed")
        .add_query_param("url", "https://example.com/clip.mp4")
        .await
        .json();
    assert_eq!(passthrough["data"]["playback"]["kind"], "passThrough");
    assert!(passthrough["data"]["thumbnail"].is_null());
}

#[tokio::test]
async fn embed_endpoint_rejects_missing_url_and_bad_mode() {
    let server = sheet_server();

    server
        .get("/api/v1/embed")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .get("/api/v1/embed")
        .add_query_param("url", "https://youtu.be/abc")
        .add_query_param("mode", "fullscreen")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
