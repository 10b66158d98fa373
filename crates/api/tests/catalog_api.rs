//! HTTP-level integration tests for the `/api/v1` catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, body_text, build_test_app, catalog_file, get, FIXTURE_CATALOG, MISSING_CATALOG,
};

// ---------------------------------------------------------------------------
// Test: GET /api/v1/catalog returns the configured document
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_returns_loaded_document() {
    let file = catalog_file(FIXTURE_CATALOG);
    let app = build_test_app(file.path().to_str().unwrap());
    let response = get(app, "/api/v1/catalog").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["categories"][1]["nameKr"], "카페");
    assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Test: malformed catalog falls back to embedded data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_catalog_falls_back() {
    let file = catalog_file("{ \"categories\": [ oops");
    let app = build_test_app(file.path().to_str().unwrap());
    let json = body_json(get(app, "/api/v1/catalog").await).await;

    assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 8);
    assert_eq!(json["data"]["projects"][0]["id"], "project-001");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/projects filters by category
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_filters_by_category() {
    let file = catalog_file(FIXTURE_CATALOG);
    let app = build_test_app(file.path().to_str().unwrap());
    let json = body_json(get(app, "/api/v1/projects?category=cafe").await).await;

    assert_eq!(json["data"]["category"], "cafe");
    let ids: Vec<&str> = json["data"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p-1", "p-3"]);
}

#[tokio::test]
async fn list_projects_defaults_to_all() {
    let file = catalog_file(FIXTURE_CATALOG);
    let app = build_test_app(file.path().to_str().unwrap());
    let json = body_json(get(app, "/api/v1/projects").await).await;

    assert_eq!(json["data"]["category"], "all");
    assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_projects_repeated_category_matches_list_page() {
    let file = catalog_file(FIXTURE_CATALOG);
    let path = file.path().to_str().unwrap();
    let uri = "?category=cafe&category=office";

    let api = get(build_test_app(path), &format!("/api/v1/projects{uri}")).await;
    assert_eq!(api.status(), StatusCode::OK);
    let json = body_json(api).await;
    assert_eq!(json["data"]["category"], "cafe");
    assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 2);

    let page = body_text(get(build_test_app(path), &format!("/projects{uri}")).await).await;
    assert!(page.contains(r#"data-active="cafe""#));
    assert!(page.contains("First Cafe"));
    assert!(!page.contains("Second Office"));
}

#[tokio::test]
async fn list_projects_unknown_category_is_empty() {
    let app = build_test_app(MISSING_CATALOG);
    let json = body_json(get(app, "/api/v1/projects?category=nonexistent").await).await;

    assert!(json["data"]["projects"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/projects/{id} returns neighbours
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_project_returns_neighbours() {
    let file = catalog_file(FIXTURE_CATALOG);
    let app = build_test_app(file.path().to_str().unwrap());
    let json = body_json(get(app, "/api/v1/projects/p-1").await).await;

    assert_eq!(json["data"]["project"]["title"], "First Cafe");
    assert!(json["data"]["previous"].is_null());
    assert_eq!(json["data"]["next"]["id"], "p-2");
}

#[tokio::test]
async fn get_unknown_project_returns_404() {
    let app = build_test_app(MISSING_CATALOG);
    let response = get(app, "/api/v1/projects/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
