#![allow(dead_code)]

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use atelier_api::catalog_loader::{CatalogLoader, CatalogSource};
use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_api::submitter::{SimulatedSubmitter, SubmitError, Submitter};
use atelier_core::contact::ContactSubmission;

/// Catalog source path that never exists, forcing the embedded fallback.
pub const MISSING_CATALOG: &str = "/nonexistent/atelier/projects.json";

/// Three projects in two categories, with gallery data on the middle one.
pub const FIXTURE_CATALOG: &str = r#"{
  "categories": [
    { "id": "all", "name": "ALL", "nameKr": "전체" },
    { "id": "cafe", "name": "CAFE", "nameKr": "카페" },
    { "id": "office", "name": "OFFICE", "nameKr": "오피스" }
  ],
  "projects": [
    { "id": "p-1", "title": "First Cafe", "category": "cafe", "location": "Seoul",
      "area": "80㎡", "year": "2024", "thumbnail": "https://img.example/1.jpg", "featured": true },
    { "id": "p-2", "title": "Second Office", "category": "office", "location": "Busan",
      "area": "300㎡", "year": "2023", "thumbnail": "https://img.example/2.jpg", "featured": false,
      "images": ["https://img.example/2a.jpg", "https://img.example/2b.jpg"],
      "description": "Open-plan office." },
    { "id": "p-3", "title": "Third Cafe", "category": "cafe", "location": "Jeju",
      "area": "95㎡", "year": "2023", "thumbnail": "https://img.example/3.jpg", "featured": true }
  ]
}"#;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(catalog_source: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog_source: catalog_source.to_string(),
        static_dir: "public".to_string(),
        contact_submit_delay_ms: 0,
    }
}

/// Write `contents` to a temporary catalog file kept alive by the caller.
pub fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    file.write_all(contents.as_bytes()).expect("write temp catalog");
    file
}

/// Build the full application router with the given catalog source and
/// submitter, through the same builder production uses.
pub fn build_app_with(catalog_source: &str, submitter: Arc<dyn Submitter>) -> Router {
    let config = test_config(catalog_source);
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(CatalogLoader::new(CatalogSource::parse(catalog_source))),
        submitter,
    };
    build_app_router(state, &config)
}

/// Router with an instant simulated submitter.
pub fn build_test_app(catalog_source: &str) -> Router {
    build_app_with(
        catalog_source,
        Arc::new(SimulatedSubmitter::new(Duration::ZERO)),
    )
}

// ---------------------------------------------------------------------------
// Test submitters
// ---------------------------------------------------------------------------

/// Counts calls and always succeeds.
#[derive(Default)]
pub struct CountingSubmitter {
    pub calls: AtomicUsize,
}

impl CountingSubmitter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for CountingSubmitter {
    async fn submit(&self, _submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Always fails.
pub struct FailingSubmitter;

#[async_trait]
impl Submitter for FailingSubmitter {
    async fn submit(&self, _submission: &ContactSubmission) -> Result<(), SubmitError> {
        Err(SubmitError::Rejected("simulated outage".into()))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
